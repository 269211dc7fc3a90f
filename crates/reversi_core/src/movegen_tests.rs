use super::*;

#[test]
fn test_startpos_black_moves() {
    let b = Board::startpos();
    let moves = valid_moves(&b, Color::Black);
    // Generation order is row-major.
    assert_eq!(
        moves,
        vec![
            Pos::new(2, 1),
            Pos::new(1, 2),
            Pos::new(4, 3),
            Pos::new(3, 4),
        ]
    );
}

#[test]
fn test_startpos_white_moves() {
    let b = Board::startpos();
    let moves = valid_moves(&b, Color::White);
    assert_eq!(
        moves,
        vec![
            Pos::new(3, 1),
            Pos::new(4, 2),
            Pos::new(1, 3),
            Pos::new(2, 4),
        ]
    );
}

#[test]
fn test_valid_moves_target_empty_cells() {
    let mut b = Board::startpos();
    b.apply_move(Color::Black, Pos::new(2, 1));

    for color in [Color::Black, Color::White] {
        for mv in valid_moves(&b, color) {
            assert_eq!(b.get(mv), Cell::Empty);
        }
    }
}

#[test]
fn test_can_place_each_direction() {
    // One mini-board per compass direction: an opponent stone adjacent to
    // (2,2) and the mover's anchor one step beyond it.
    for (dx, dy) in DIRECTIONS {
        let p = Pos::new(2, 2);
        let mut b = Board::empty();
        let opp = pos(p.x as i8 + dx, p.y as i8 + dy).expect("in bounds");
        let anchor = pos(p.x as i8 + 2 * dx, p.y as i8 + 2 * dy).expect("in bounds");
        b.set(opp, Cell::White);
        b.set(anchor, Cell::Black);

        assert!(
            can_place(&b, Color::Black, p),
            "direction ({dx}, {dy}) should allow the move"
        );
        assert!(
            !can_place(&b, Color::White, p),
            "direction ({dx}, {dy}) must not work for the run's own color"
        );
    }
}

#[test]
fn test_can_place_false_when_adjacent_is_not_opponent() {
    // Own stone adjacent, opponent beyond it: no opponent run starts at p.
    let mut b = Board::empty();
    b.set(Pos::new(3, 2), Cell::Black);
    b.set(Pos::new(4, 2), Cell::White);
    assert!(!can_place(&b, Color::Black, Pos::new(2, 2)));
}

#[test]
fn test_can_place_false_when_run_hits_edge() {
    // Opponent run reaching the board edge without an anchoring stone.
    let mut b = Board::empty();
    b.set(Pos::new(1, 0), Cell::White);
    b.set(Pos::new(0, 0), Cell::White);
    assert!(!can_place(&b, Color::Black, Pos::new(2, 0)));
}

#[test]
fn test_can_place_false_when_run_ends_on_empty() {
    let mut b = Board::empty();
    b.set(Pos::new(3, 2), Cell::White);
    // (4,2) empty: the walk stops on a cell that is neither color.
    assert!(!can_place(&b, Color::Black, Pos::new(2, 2)));
}

#[test]
fn test_can_place_false_on_occupied_cell() {
    let b = Board::startpos();
    assert!(!can_place(&b, Color::Black, Pos::new(2, 2)));
    assert!(!can_place(&b, Color::Black, Pos::new(3, 2)));
}

#[test]
fn test_valid_moves_into_reuses_buffer() {
    let b = Board::startpos();
    let mut buf = vec![Pos::new(5, 5)];
    valid_moves_into(&b, Color::Black, &mut buf);
    assert_eq!(buf.len(), 4);
    valid_moves_into(&b, Color::White, &mut buf);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf[0], Pos::new(3, 1));
}

#[test]
fn test_no_moves_on_empty_board() {
    let b = Board::empty();
    assert!(valid_moves(&b, Color::Black).is_empty());
    assert!(valid_moves(&b, Color::White).is_empty());
}
