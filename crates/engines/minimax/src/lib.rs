//! Minimax Reversi Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a positional
//! weight-table evaluation. This is the playing engine; the random engine
//! is the baseline it is measured against.

mod eval;
mod search;

use reversi_core::{Board, Color, Engine, SearchResult};

/// Empty-cell count above which the shallower depth is used.
const DEPTH_SWITCH_EMPTIES: u32 = 12;
/// Depth while the board is still open.
const EARLY_DEPTH: u8 = 4;
/// Depth once 12 or fewer cells remain.
const ENDGAME_DEPTH: u8 = 6;

/// Search depth the engine uses for `board`: 4 plies while more than 12
/// cells are empty, 6 plies from there to the end of the game.
pub fn depth_for(board: &Board) -> u8 {
    if board.count_empty() > DEPTH_SWITCH_EMPTIES {
        EARLY_DEPTH
    } else {
        ENDGAME_DEPTH
    }
}

/// Reversi engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax (no iterative deepening, no caching)
/// - Weight-table evaluation with a mobility term
/// - A two-tier depth schedule keyed on the number of empty cells
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 0;
        let depth = depth_for(board);
        let (score, best_move) = search::pick_best_move(board, color, depth, &mut self.nodes);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, WEIGHTS};
pub use search::{minimax, pick_best_move};
