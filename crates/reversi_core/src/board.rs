use std::fmt;

use crate::types::*;

/// A 6x6 Reversi board.
///
/// Cloning produces a fully independent copy; the search layer relies on
/// that to explore sibling branches without aliasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position: the four center cells hold
    /// alternating stones, everything else is empty.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.set(Pos::new(2, 2), Cell::White);
        b.set(Pos::new(3, 2), Cell::Black);
        b.set(Pos::new(2, 3), Cell::Black);
        b.set(Pos::new(3, 3), Cell::White);
        b
    }

    /// Cell at `p`. Callers must pass in-bounds coordinates; no internal
    /// range check is performed.
    pub fn get(&self, p: Pos) -> Cell {
        self.cells[p.y as usize][p.x as usize]
    }

    /// Overwrite the cell at `p`. Same in-bounds contract as `get`.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        self.cells[p.y as usize][p.x as usize] = cell;
    }

    pub fn count_empty(&self) -> u32 {
        self.count_cell(Cell::Empty)
    }

    pub fn count_color(&self, color: Color) -> u32 {
        self.count_cell(color.cell())
    }

    fn count_cell(&self, cell: Cell) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count() as u32
    }

    /// Place a stone for `color` at `p` and flip every anchored run of
    /// opponent stones radiating from it.
    ///
    /// This performs no legality check: callers are expected to have
    /// verified the move with `movegen::can_place` on the same board.
    /// Called on an illegal square it still records the stone and flips
    /// whichever directions happen to satisfy the run condition.
    pub fn apply_move(&mut self, color: Color, p: Pos) {
        self.set(p, color.cell());
        for (dx, dy) in DIRECTIONS {
            self.flip_run(color, p, dx, dy);
        }
    }

    /// Flip the contiguous opponent run starting next to `p` in one
    /// direction, provided the run ends in-bounds on a `color` stone.
    fn flip_run(&mut self, color: Color, p: Pos, dx: i8, dy: i8) {
        let opponent = color.other().cell();

        let mut nx = p.x as i8 + dx;
        let mut ny = p.y as i8 + dy;
        let mut run = 0u8;
        while let Some(q) = pos(nx, ny) {
            if self.get(q) != opponent {
                break;
            }
            run += 1;
            nx += dx;
            ny += dy;
        }

        let anchored = run > 0 && matches!(pos(nx, ny), Some(q) if self.get(q) == color.cell());
        if !anchored {
            return;
        }

        let mut fx = p.x as i8 + dx;
        let mut fy = p.y as i8 + dy;
        for _ in 0..run {
            // In-bounds by construction: the scan above visited these cells.
            self.set(Pos::new(fx as u8, fy as u8), color.cell());
            fx += dx;
            fy += dy;
        }
    }

    /// Board as the wire shape hosts exchange: rows of cell codes
    /// (0 = empty, 1 = black, 2 = white), row 0 first.
    pub fn to_codes(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut codes = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                codes[y][x] = cell.code();
            }
        }
        codes
    }

    /// Build a board from wire codes, rejecting anything outside the
    /// three-valued cell domain.
    pub fn from_codes(codes: &[[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, String> {
        let mut b = Board::empty();
        for (y, row) in codes.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code)
                    .ok_or_else(|| format!("invalid cell code {} at ({}, {})", code, x, y))?;
                b.cells[y][x] = cell;
            }
        }
        Ok(b)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f")?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", y + 1)?;
            for (x, &cell) in row.iter().enumerate() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{}", ch)?;
                if x + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
