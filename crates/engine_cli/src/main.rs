use minimax_engine::MinimaxEngine;
use reversi_core::{can_place, coord_to_pos, pos_to_coord, Board, Color, Engine, BOARD_SIZE};
use std::io::{self, BufRead, Write};

/// Parse `position` operands: six row tokens of six cell codes each,
/// row 0 first, e.g. `000000 000000 002100 001200 000000 000000`.
fn parse_position(parts: &[&str]) -> Result<Board, String> {
    if parts.len() != BOARD_SIZE {
        return Err(format!("expected {} rows, got {}", BOARD_SIZE, parts.len()));
    }

    let mut codes = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (y, row) in parts.iter().enumerate() {
        if row.len() != BOARD_SIZE {
            return Err(format!("row {} must have {} cells", y, BOARD_SIZE));
        }
        for (x, ch) in row.chars().enumerate() {
            let code = ch
                .to_digit(10)
                .ok_or_else(|| format!("invalid cell character '{}' in row {}", ch, y))?;
            codes[y][x] = code as u8;
        }
    }

    Board::from_codes(&codes)
}

fn parse_color(token: &str) -> Option<Color> {
    match token {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

fn main() {
    // The engine talks to its host via stdin/stdout, one command per line.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut board = Board::startpos();
    let mut engine = MinimaxEngine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "name" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                stdout.flush().ok();
            }
            "newgame" => {
                board = Board::startpos();
                engine.new_game();
            }
            "position" => match parse_position(&parts[1..]) {
                Ok(b) => board = b,
                Err(e) => {
                    writeln!(stdout, "error {}", e).ok();
                    stdout.flush().ok();
                }
            },
            "go" => {
                let color = parts.get(1).copied().and_then(parse_color);
                match color {
                    Some(color) => {
                        let result = engine.select_move(&board, color);
                        match result.best_move {
                            Some(mv) => {
                                writeln!(stdout, "bestmove {}", pos_to_coord(mv)).ok();
                            }
                            None => {
                                writeln!(stdout, "bestmove pass").ok();
                            }
                        }
                    }
                    None => {
                        writeln!(stdout, "error go requires a color (b or w)").ok();
                    }
                }
                stdout.flush().ok();
            }
            "play" => {
                // Example: play b c2 - applies a move to the held board.
                let color = parts.get(1).copied().and_then(parse_color);
                let mv = parts.get(2).copied().and_then(coord_to_pos);
                match (color, mv) {
                    (Some(color), Some(mv)) if can_place(&board, color, mv) => {
                        board.apply_move(color, mv);
                    }
                    (Some(_), Some(_)) => {
                        writeln!(stdout, "error illegal move").ok();
                        stdout.flush().ok();
                    }
                    _ => {
                        writeln!(stdout, "error play requires a color and a coordinate").ok();
                        stdout.flush().ok();
                    }
                }
            }
            "show" => {
                write!(stdout, "{}", board).ok();
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
    }
}
