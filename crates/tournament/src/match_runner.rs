//! Match runner for playing games between engines
//!
//! The runner owns the authoritative board and the turn loop: it queries
//! the engine whose turn it is, validates the returned move through the
//! rules layer before applying it, handles passes, and detects the end of
//! the game. Engines only ever see the board; they never drive the loop.

use reversi_core::{can_place, Board, Color, Engine};
use serde::{Deserialize, Serialize};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Summed disc margin over all games, from engine1's perspective
    pub disc_margin: i64,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
            disc_margin: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring a draw (a pass counts as a ply)
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 80,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured; black moves first in Reversi
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let (game_result, margin) = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is white
                let (r, m) = self.play_game(engine2, engine1);
                (r.flipped(), -m)
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }
            result.disc_margin += i64::from(margin);

            if self.config.verbose {
                let color = if engine1_black { "B" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game. Returns the result and disc margin from black's
    /// perspective.
    fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> (GameResult, i32) {
        let mut board = Board::startpos();
        black.new_game();
        white.new_game();

        let mut color = Color::Black;
        let mut passes = 0u8;

        for _ply in 0..self.config.max_plies {
            // Two consecutive passes end the game
            if passes >= 2 {
                break;
            }

            let result = if color == Color::Black {
                black.select_move(&board, color)
            } else {
                white.select_move(&board, color)
            };

            match result.best_move {
                Some(mv) => {
                    // The host's rules engine is the source of truth: an
                    // engine returning an illegal move forfeits, with the
                    // remaining empty cells awarded to the other side.
                    if !can_place(&board, color, mv) {
                        let black_discs = board.count_color(Color::Black) as i32;
                        let white_discs = board.count_color(Color::White) as i32;
                        let empties = board.count_empty() as i32;
                        return if color == Color::Black {
                            (GameResult::Loss, black_discs - white_discs - empties)
                        } else {
                            (GameResult::Win, black_discs - white_discs + empties)
                        };
                    }
                    board.apply_move(color, mv);
                    passes = 0;
                }
                None => {
                    // Pass; the engine had no legal move
                    passes += 1;
                }
            }

            color = color.other();
        }

        let black_discs = board.count_color(Color::Black) as i32;
        let white_discs = board.count_color(Color::White) as i32;
        let margin = black_discs - white_discs;

        let result = match margin {
            m if m > 0 => GameResult::Win,
            m if m < 0 => GameResult::Loss,
            _ => GameResult::Draw,
        };
        (result, margin)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn test_self_play_fixture() {
        // Minimax self-play is deterministic: black fills the board and
        // loses 15-21.
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = MinimaxEngine::new();

        let config = MatchConfig {
            num_games: 1,
            alternate_colors: false,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        assert_eq!(result.total_games(), 1);
        assert_eq!(result.losses, 1);
        assert_eq!(result.disc_margin, -6);
    }

    #[test]
    fn test_alternating_self_play_balances_out() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = MinimaxEngine::new();

        let config = MatchConfig {
            num_games: 2,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        // Both games are the same deterministic game with seats swapped.
        assert_eq!(result.wins, 1);
        assert_eq!(result.losses, 1);
        assert_eq!(result.disc_margin, 0);
    }

    #[test]
    fn test_match_against_random_completes() {
        let mut minimax = MinimaxEngine::new();
        let mut random = RandomEngine::new();

        let result = quick_match(&mut minimax, &mut random, 2);

        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_match_result_score() {
        let result = MatchResult {
            wins: 3,
            losses: 1,
            draws: 2,
            disc_margin: 10,
        };
        assert_eq!(result.total_games(), 6);
        assert!((result.score() - (4.0 / 6.0)).abs() < 1e-9);
    }
}
