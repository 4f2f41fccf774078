use super::*;

#[test]
fn test_queen_attack_through_an_open_diagonal() {
    // A black queen dropped on e2 sees c4 through d3.
    let mut pos = Position::default();
    assert!(!pos.is_attacked(sq("c4"), Color::Black));
    pos.put(sq("e2"), Piece::new(Color::Black, Kind::Queen));
    pos.refresh();
    assert!(pos.is_attacked(sq("c4"), Color::Black));
}

#[test]
fn test_sliders_are_blocked_by_any_piece() {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "a4", Color::Black, Kind::Rook);
    pos.refresh();
    assert!(pos.is_attacked(sq("h4"), Color::Black));
    place(&mut pos, "d4", Color::White, Kind::Pawn);
    pos.refresh();
    assert!(!pos.is_attacked(sq("h4"), Color::Black));
    // The blocker's own square is still attacked.
    assert!(pos.is_attacked(sq("d4"), Color::Black));
}

#[test]
fn test_pawns_attack_diagonally_forward_only() {
    let mut pos = Position::empty();
    place(&mut pos, "e4", Color::White, Kind::Pawn);
    assert!(pos.is_attacked(sq("d5"), Color::White));
    assert!(pos.is_attacked(sq("f5"), Color::White));
    assert!(!pos.is_attacked(sq("e5"), Color::White));
    assert!(!pos.is_attacked(sq("d3"), Color::White));

    let mut pos = Position::empty();
    place(&mut pos, "e5", Color::Black, Kind::Pawn);
    assert!(pos.is_attacked(sq("d4"), Color::Black));
    assert!(pos.is_attacked(sq("f4"), Color::Black));
    assert!(!pos.is_attacked(sq("d6"), Color::Black));
}

#[test]
fn test_knight_attacks_jump_over_blockers() {
    let pos = Position::default();
    // b1 covers c3 and a3 through the pawn wall.
    assert!(pos.is_attacked(sq("c3"), Color::White));
    assert!(pos.is_attacked(sq("a3"), Color::White));
    assert!(!pos.is_attacked(sq("b3"), Color::White));
}

#[test]
fn test_check_flag_tracks_the_attack_predicate() {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "e5", Color::Black, Kind::Rook);
    pos.refresh();
    assert!(pos.in_check(Color::White));
    assert_eq!(
        pos.in_check(Color::White),
        pos.is_attacked(pos.king(Color::White), Color::Black)
    );
    assert!(!pos.in_check(Color::Black));

    // Blocking the file clears the flag after the move.
    place(&mut pos, "d2", Color::White, Kind::Rook);
    pos.refresh();
    pos.make_move(mv("d2e2"), true);
    assert!(!pos.in_check(Color::White));
}

#[test]
fn test_moving_a_pinned_piece_is_illegal() {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "e4", Color::White, Kind::Bishop);
    place(&mut pos, "e7", Color::Black, Kind::Rook);
    pos.refresh();
    // The bishop shields the king from the rook; any bishop move exposes it.
    assert!(!pos.is_legal(mv("e4d5")));
    assert!(!pos.is_legal(mv("e4f5")));
    // The king itself may step aside.
    assert!(pos.is_legal(mv("e1d1")));
}
