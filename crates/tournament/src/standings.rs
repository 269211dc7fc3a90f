//! Cumulative standings across matches
//!
//! Reversi engine comparisons here are ranked by score rate with summed
//! disc margin as the tie-breaker, which is more informative than a
//! rating model at this scale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::match_runner::MatchResult;

/// Lifetime record of one engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Summed disc margin over every game played
    pub disc_margin: i64,
}

impl EngineRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of points taken (1 per win, 0.5 per draw)
    pub fn score_rate(&self) -> f64 {
        let games = self.games() as f64;
        if games == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / games
    }
}

/// Record of a single match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub timestamp: String,
}

/// Standings ledger for all engines that have played
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingsTracker {
    /// Records for each engine (by name/version)
    pub records: HashMap<String, EngineRecord>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

impl StandingsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Fold a match result into both engines' records
    pub fn record_match(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        {
            let rec = self.records.entry(engine1.to_string()).or_default();
            rec.wins += result.wins;
            rec.losses += result.losses;
            rec.draws += result.draws;
            rec.disc_margin += result.disc_margin;
        }
        {
            let rec = self.records.entry(engine2.to_string()).or_default();
            rec.wins += result.losses;
            rec.losses += result.wins;
            rec.draws += result.draws;
            rec.disc_margin -= result.disc_margin;
        }

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
        });
    }

    /// Standings sorted best-first: score rate, then disc margin
    pub fn table(&self) -> Vec<(String, EngineRecord)> {
        let mut entries: Vec<_> = self
            .records
            .iter()
            .map(|(name, rec)| (name.clone(), rec.clone()))
            .collect();
        entries.sort_by(|a, b| {
            b.1.score_rate()
                .partial_cmp(&a.1.score_rate())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.1.disc_margin.cmp(&a.1.disc_margin))
        });
        entries
    }

    /// Print standings to stdout
    pub fn print_table(&self) {
        println!("\n=== Engine Standings ===");
        println!(
            "{:<20} {:>6} {:>6} {:>6} {:>8} {:>8}",
            "Engine", "W", "L", "D", "Score%", "Discs"
        );
        println!("{}", "-".repeat(60));
        for (name, rec) in self.table() {
            println!(
                "{:<20} {:>6} {:>6} {:>6} {:>7.1}% {:>+8}",
                name,
                rec.wins,
                rec.losses,
                rec.draws,
                rec.score_rate() * 100.0,
                rec.disc_margin
            );
        }
        println!();
    }
}

/// Simple timestamp without external dependency
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
