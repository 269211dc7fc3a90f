pub mod board;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Reversi engines (minimax, random, etc.)
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None means the side to move has to pass)
    pub best_move: Option<Pos>,
    /// Evaluation score from the searcher's point of view at the root
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (optional, for stats)
    pub nodes: u64,
}

/// Trait that all Reversi engines must implement.
///
/// This allows swapping between the minimax engine, the random baseline,
/// and whatever comes next without touching the host side.
pub trait Engine: Send {
    /// Choose a move for `color` on `board`.
    ///
    /// The board belongs to the host and must not be mutated; engines
    /// explore on their own clones. A `best_move` of `None` signals a
    /// pass; the host owns pass handling and game termination.
    fn select_move(&mut self, board: &Board, color: Color) -> SearchResult;

    /// Display identifier shown by hosts. Carries no game logic.
    fn name(&self) -> &str;

    /// Reset internal state for a new game (counters, caches, ...)
    fn new_game(&mut self) {}
}
