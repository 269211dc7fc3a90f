use crate::{board::Board, types::*};

/// True if `color` may legally place a stone at `p`: the cell is empty and
/// at least one direction holds a non-empty opponent run ending in-bounds
/// on one of the mover's own stones.
///
/// `p` must be in-bounds; that is the caller's contract, as for
/// `Board::get`.
pub fn can_place(board: &Board, color: Color, p: Pos) -> bool {
    if board.get(p) != Cell::Empty {
        return false;
    }

    let opponent = color.other().cell();
    for (dx, dy) in DIRECTIONS {
        let mut nx = p.x as i8 + dx;
        let mut ny = p.y as i8 + dy;
        let mut found_opponent = false;

        while let Some(q) = pos(nx, ny) {
            if board.get(q) != opponent {
                break;
            }
            found_opponent = true;
            nx += dx;
            ny += dy;
        }

        if found_opponent && matches!(pos(nx, ny), Some(q) if board.get(q) == color.cell()) {
            return true;
        }
    }

    false
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `valid_moves_into`.
pub fn valid_moves(board: &Board, color: Color) -> Vec<Pos> {
    let mut out = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    valid_moves_into(board, color, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. The scan is row-major (row 0 first, left to right); downstream
/// search relies on this order for tie-breaking, so it must not change.
pub fn valid_moves_into(board: &Board, color: Color, out: &mut Vec<Pos>) {
    out.clear();
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let p = Pos::new(x, y);
            if can_place(board, color, p) {
                out.push(p);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
