use super::*;

fn white_pawn_on_e5() -> Position {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "e5", Color::White, Kind::Pawn);
    place(&mut pos, "d7", Color::Black, Kind::Pawn);
    place(&mut pos, "b1", Color::White, Kind::Knight);
    place(&mut pos, "b8", Color::Black, Kind::Knight);
    pos.side_to_move = Color::Black;
    pos.refresh();
    pos
}

#[test]
fn test_capture_right_after_the_double_push() {
    let mut pos = white_pawn_on_e5();
    pos.make_move(mv("d7d5"), true);
    assert_eq!(pos.en_passant[Color::Black.index()], Some(3));
    assert!(pos.is_legal(mv("e5d6")));

    pos.make_move(mv("e5d6"), true);
    // The bypassed pawn is gone and the capturer sits on d6.
    assert!(pos.get(sq("d5")).is_empty());
    assert_eq!(pos.get(sq("d6")).kind, Kind::Pawn);
    assert_eq!(pos.get(sq("d6")).color, Color::White);
}

#[test]
fn test_target_expires_after_one_ply() {
    let mut pos = white_pawn_on_e5();
    pos.make_move(mv("d7d5"), true);
    // White declines the capture; black moves; the chance is gone.
    pos.make_move(mv("b1c3"), true);
    pos.make_move(mv("b8c6"), true);
    assert_eq!(pos.en_passant[Color::Black.index()], None);
    assert!(!pos.is_legal(mv("e5d6")));
}

#[test]
fn test_single_push_grants_no_target() {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "e5", Color::White, Kind::Pawn);
    place(&mut pos, "d6", Color::Black, Kind::Pawn);
    pos.side_to_move = Color::Black;
    pos.refresh();
    pos.make_move(mv("d6d5"), true);
    assert_eq!(pos.en_passant[Color::Black.index()], None);
    // The pawns sit side by side, but a single push leaves no target: the
    // diagonal onto the empty d6 square stays illegal.
    assert!(!pos.is_legal(mv("e5d6")));
}

#[test]
fn test_wrong_rank_pawn_cannot_capture() {
    // White pawn still on e4 when black double-pushes d7d5: the pawns end
    // up on different ranks and no capture exists.
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "e4", Color::White, Kind::Pawn);
    place(&mut pos, "d7", Color::Black, Kind::Pawn);
    pos.side_to_move = Color::Black;
    pos.refresh();
    pos.make_move(mv("d7d5"), true);
    assert!(!pos.is_legal(mv("e4d5")));
    assert!(!pos.is_legal(mv("e4d3")));
}

#[test]
fn test_black_captures_en_passant_too() {
    let mut pos = kings_only("e1", "e8");
    place(&mut pos, "d4", Color::Black, Kind::Pawn);
    place(&mut pos, "e2", Color::White, Kind::Pawn);
    pos.refresh();
    pos.make_move(mv("e2e4"), true);
    assert_eq!(pos.en_passant[Color::White.index()], Some(4));
    assert!(pos.is_legal(mv("d4e3")));

    pos.make_move(mv("d4e3"), true);
    assert!(pos.get(sq("e4")).is_empty());
    assert_eq!(pos.get(sq("e3")).color, Color::Black);
}

#[test]
fn test_capture_is_generated_as_a_pawn_move() {
    let mut pos = white_pawn_on_e5();
    pos.make_move(mv("d7d5"), true);
    let moves = pos.pawn_moves(sq("e5"));
    assert!(has_move(&moves, "e5d6"));
    assert!(pos.is_capture(mv("e5d6")));
}
