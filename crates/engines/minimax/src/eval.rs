//! Positional evaluation: static cell weights plus mobility

use reversi_core::{valid_moves, Board, Color, Pos, BOARD_SIZE};

/// Static cell weights, indexed `WEIGHTS[y][x]`. Corners dominate, cells
/// adjacent to corners are liabilities, the center is mildly useful.
/// Process-wide constant; never mutated.
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 10, -20, 100],
    [-20, -50, 1, 1, -50, -20],
    [10, 1, 5, 5, 1, 10],
    [10, 1, 5, 5, 1, 10],
    [-20, -50, 1, 1, -50, -20],
    [100, -20, 10, 10, -20, 100],
];

/// Weight of one legal move in the mobility term.
const MOBILITY_WEIGHT: i32 = 5;

/// Evaluates the board from `color`'s perspective.
///
/// The score is the weight-table sum over `color`'s stones minus the sum
/// over the opponent's, plus `MOBILITY_WEIGHT` per legal move of
/// difference in mobility. There are no other terms. Pure function; the
/// board is never touched.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let opponent = color.other();
    let mut score = 0i32;

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let cell = board.get(Pos::new(x as u8, y as u8));
            if cell == color.cell() {
                score += WEIGHTS[y][x];
            } else if cell == opponent.cell() {
                score -= WEIGHTS[y][x];
            }
        }
    }

    let mobility = valid_moves(board, color).len() as i32;
    let opponent_mobility = valid_moves(board, opponent).len() as i32;

    score + MOBILITY_WEIGHT * (mobility - opponent_mobility)
}
