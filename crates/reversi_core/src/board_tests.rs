use super::*;

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();

    assert_eq!(b.get(Pos::new(2, 2)), Cell::White);
    assert_eq!(b.get(Pos::new(3, 2)), Cell::Black);
    assert_eq!(b.get(Pos::new(2, 3)), Cell::Black);
    assert_eq!(b.get(Pos::new(3, 3)), Cell::White);

    assert_eq!(b.count_color(Color::Black), 2);
    assert_eq!(b.count_color(Color::White), 2);
    assert_eq!(b.count_empty(), 32);
}

#[test]
fn test_clone_is_independent() {
    let a = Board::startpos();
    let mut b = a.clone();
    b.apply_move(Color::Black, Pos::new(2, 1));

    assert_eq!(a, Board::startpos());
    assert_ne!(a, b);
}

#[test]
fn test_apply_move_flips_anchored_run() {
    let mut b = Board::startpos();
    // Black at (2,1): the white stone at (2,2) sits between the new stone
    // and black's own (2,3), so it flips.
    b.apply_move(Color::Black, Pos::new(2, 1));

    assert_eq!(b.get(Pos::new(2, 1)), Cell::Black);
    assert_eq!(b.get(Pos::new(2, 2)), Cell::Black);
    // The other white stone is untouched.
    assert_eq!(b.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(b.count_color(Color::Black), 4);
    assert_eq!(b.count_color(Color::White), 1);
}

#[test]
fn test_apply_move_does_not_check_legality() {
    // (0,0) is not a legal move on the starting board. apply_move still
    // records the stone and, with no anchored run, flips nothing.
    let mut b = Board::startpos();
    b.apply_move(Color::Black, Pos::new(0, 0));

    assert_eq!(b.get(Pos::new(0, 0)), Cell::Black);
    assert_eq!(b.count_color(Color::Black), 3);
    assert_eq!(b.count_color(Color::White), 2);
}

#[test]
fn test_apply_move_skips_unanchored_run() {
    // A white run that reaches the edge without a closing black stone
    // must stay white even though an anchored run elsewhere flips.
    let mut b = Board::empty();
    b.set(Pos::new(1, 0), Cell::White);
    b.set(Pos::new(0, 0), Cell::White); // run to the left edge, no anchor
    b.set(Pos::new(3, 0), Cell::White);
    b.set(Pos::new(4, 0), Cell::Black); // anchors the run to the right

    b.apply_move(Color::Black, Pos::new(2, 0));

    assert_eq!(b.get(Pos::new(2, 0)), Cell::Black);
    assert_eq!(b.get(Pos::new(3, 0)), Cell::Black);
    assert_eq!(b.get(Pos::new(1, 0)), Cell::White);
    assert_eq!(b.get(Pos::new(0, 0)), Cell::White);
}

#[test]
fn test_codes_round_trip() {
    let b = Board::startpos();
    let codes = b.to_codes();

    assert_eq!(codes[2][2], 2);
    assert_eq!(codes[2][3], 1);
    assert_eq!(codes[3][2], 1);
    assert_eq!(codes[3][3], 2);
    assert_eq!(codes[0][0], 0);

    let back = Board::from_codes(&codes).expect("valid codes");
    assert_eq!(back, b);
}

#[test]
fn test_from_codes_rejects_out_of_domain() {
    let mut codes = Board::startpos().to_codes();
    codes[1][4] = 3;

    let err = Board::from_codes(&codes).unwrap_err();
    assert!(err.contains("invalid cell code"), "got: {err}");
}

#[test]
fn test_display_renders_grid() {
    let text = Board::startpos().to_string();
    assert!(text.contains("a b c d e f"));
    assert!(text.contains("W B"));
}
