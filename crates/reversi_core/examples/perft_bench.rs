//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p reversi_core -- [depth]
//!
//! Examples:
//!   # Default: depth 9 from the starting position
//!   cargo flamegraph --example perft_bench -p reversi_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p reversi_core -- 11

use reversi_core::{perft, Board, Color, Pos};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut early = Board::startpos();
    early.apply_move(Color::Black, Pos::new(2, 1));

    let positions: &[(&str, Board, Color)] = &[
        ("Starting position", Board::startpos(), Color::Black),
        ("After black c2", early, Color::White),
    ];

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, board, color) in positions {
        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(board, *color, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
