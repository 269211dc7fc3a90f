//! Match runner for Reversi engines
//!
//! This crate is the host side of the engine contract: it owns the
//! authoritative board, sequences turns, validates moves, handles passes,
//! and detects the end of the game. On top of that it provides:
//! - Running matches between different engines
//! - Cumulative standings with disc-margin tie-breaks
//! - Series reports for comparing engine versions
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax engine and the random baseline
//! cargo run -p tournament -- match minimax random --games 10
//!
//! # Round-robin series over all known engines
//! cargo run -p tournament -- series --games 4
//! ```

mod match_runner;
mod results;
mod standings;

pub use match_runner::*;
pub use results::*;
pub use standings::*;
