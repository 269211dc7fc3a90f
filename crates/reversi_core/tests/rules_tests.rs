use rayon::prelude::*;

use reversi_core::{can_place, perft, valid_moves, Board, Cell, Color, Pos};

/// Leaf counts of the move tree from the starting position, computed once
/// by exhaustive expansion and kept as regression fixtures.
const LEAF_COUNTS: &[(u8, u64)] = &[(0, 1), (1, 4), (2, 12), (3, 56), (4, 244), (5, 1364)];

#[test]
fn perft_from_startpos() {
    let board = Board::startpos();
    LEAF_COUNTS.par_iter().for_each(|&(depth, expected)| {
        let got = perft(&board, Color::Black, depth);
        assert_eq!(
            got, expected,
            "leaf count mismatch at depth {depth}: expected {expected}, got {got}"
        );
    });
}

#[test]
fn perft_is_color_symmetric_at_startpos() {
    // The starting position is rotationally symmetric, so both colors see
    // trees of the same shape.
    let board = Board::startpos();
    for depth in 0..=4u8 {
        assert_eq!(
            perft(&board, Color::Black, depth),
            perft(&board, Color::White, depth)
        );
    }
}

#[test]
fn every_generated_move_passes_can_place() {
    let mut board = Board::startpos();
    let mut color = Color::Black;

    // Walk a deterministic game taking the first legal move each ply.
    for _ in 0..20 {
        let moves = valid_moves(&board, color);
        for &mv in &moves {
            assert!(can_place(&board, color, mv));
            assert_eq!(board.get(mv), Cell::Empty);
        }
        match moves.first() {
            Some(&mv) => board.apply_move(color, mv),
            None => {}
        }
        color = color.other();
    }
}

#[test]
fn applying_a_legal_move_always_flips() {
    let board = Board::startpos();
    for mv in valid_moves(&board, Color::Black) {
        let mut child = board.clone();
        child.apply_move(Color::Black, mv);

        // One stone placed, at least one flipped.
        assert_eq!(child.count_empty(), board.count_empty() - 1);
        assert!(child.count_color(Color::Black) >= board.count_color(Color::Black) + 2);
    }
}

#[test]
fn wire_codes_match_host_contract() {
    // Hosts exchange rows of 0/1/2; row-major with row 0 first.
    let board = Board::startpos();
    let codes = board.to_codes();

    let flat: Vec<u8> = codes.iter().flatten().copied().collect();
    assert_eq!(flat.len(), 36);
    assert!(flat.iter().all(|&c| c <= 2));

    let restored = Board::from_codes(&codes).expect("round trip");
    assert_eq!(restored.get(Pos::new(3, 2)), Cell::Black);
    assert_eq!(restored.get(Pos::new(2, 2)), Cell::White);
}
