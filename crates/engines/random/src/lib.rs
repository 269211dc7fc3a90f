//! Random Move Reversi Engine
//!
//! A simple engine that selects moves uniformly at random from all legal
//! moves. Useful for:
//! - Exercising the match infrastructure
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use rand::seq::SliceRandom;
use rand::thread_rng;
use reversi_core::{valid_moves, Board, Color, Engine, SearchResult};


/// A Reversi engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, board: &Board, color: Color) -> SearchResult {
        let moves = valid_moves(board, color);
        self.nodes = 1;

        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
