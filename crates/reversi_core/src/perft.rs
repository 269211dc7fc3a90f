use crate::{board::Board, movegen::valid_moves, types::Color};

/// Pure tree node count for the rules layer.
///
/// Counts the cutoff positions of a fixed-depth game tree rooted at
/// (`board`, `color`): a position is a leaf when `depth` is exhausted or
/// the side to move has no legal move. This mirrors the terminal rule of
/// the minimax search, so the counts double as search-shape fixtures.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = valid_moves(board, color);
    if moves.is_empty() {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(color, mv);
        nodes += perft(&child, color.other(), depth - 1);
    }
    nodes
}
