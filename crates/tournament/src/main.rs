//! Tournament CLI
//!
//! Run matches between engines and track standings.

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use reversi_core::Engine;
use std::env;
use std::path::Path;
use tournament::{
    quick_match, MatchConfig, MatchRunner, SeriesConfig, SeriesResults, StandingsTracker,
};

const STANDINGS_FILE: &str = "reversi_standings.json";

fn print_usage() {
    println!("Reversi Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N]");
    println!("  tournament series [--games N] [--config FILE]");
    println!("  tournament standings");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta minimax with positional eval");
    println!("  random        - Uniform random legal move");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20");
    println!("  tournament series --config series.toml");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" | "mm" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], names: &[&str], default: T) -> T {
    let mut i = 0;
    while i < args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse() {
                return v;
            }
        }
        i += 1;
    }
    default
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let num_games: u32 = parse_flag(&args[2..], &["--games", "-g"], 10);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}", num_games);
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let config = MatchConfig {
        num_games,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws ({:+} discs)",
        engine1_spec, result.wins, result.losses, result.draws, result.disc_margin
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = StandingsTracker::load(STANDINGS_FILE).unwrap_or_default();
    tracker.record_match(engine1_spec, engine2_spec, &result);
    tracker.print_table();

    if let Err(e) = tracker.save(STANDINGS_FILE) {
        eprintln!("Warning: Failed to save standings: {}", e);
    }
}

fn run_series(args: &[String]) {
    let mut config = SeriesConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match SeriesConfig::from_toml_file(Path::new(&args[i + 1])) {
                        Ok(c) => config = c,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            return;
                        }
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match = args[i + 1].parse().unwrap_or(config.games_per_match);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let participants = vec!["minimax".to_string(), "random".to_string()];

    println!("=== Series: round-robin ===");
    println!("Participants: {:?}", participants);
    println!("Games per match: {}", config.games_per_match);
    println!();

    let mut tracker = StandingsTracker::load(STANDINGS_FILE).unwrap_or_default();
    let mut results = SeriesResults::new("Round-robin", participants.clone(), config.clone());

    for (a_idx, a) in participants.iter().enumerate() {
        for b in participants.iter().skip(a_idx + 1) {
            println!("\n--- {} vs {} ---", a, b);

            let mut engine_a = create_engine(a);
            let mut engine_b = create_engine(b);

            let result = quick_match(
                engine_a.as_mut(),
                engine_b.as_mut(),
                results.config.games_per_match,
            );

            println!(
                "Result: {}-{}-{} (Score: {:.1}%, {:+} discs)",
                result.wins,
                result.losses,
                result.draws,
                result.score() * 100.0,
                result.disc_margin
            );

            tracker.record_match(a, b, &result);
            results.add_match(a, b, result);
        }
    }

    println!();
    tracker.print_table();
    results.print_report();

    if let Err(e) = tracker.save(STANDINGS_FILE) {
        eprintln!("Warning: Failed to save standings: {}", e);
    }
}

fn show_standings() {
    match StandingsTracker::load(STANDINGS_FILE) {
        Ok(tracker) => tracker.print_table(),
        Err(_) => {
            println!("No match data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "series" => run_series(&args[2..]),
        "standings" => show_standings(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
