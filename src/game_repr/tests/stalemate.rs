use super::*;

#[test]
fn test_cornered_king_with_no_moves() {
    // Black to move: not in check, but every square around a8 is covered.
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
    assert!(!pos.in_check(Color::Black));
    assert!(pos.is_stalemate(Color::Black));
    assert!(!pos.is_checkmate(Color::Black));
}

#[test]
fn test_blocked_pawns_alone_can_stalemate() {
    // Black has only the king and a pawn frozen against white's.
    let pos = Position::from_fen("k7/8/1Q2p3/4P3/8/8/8/K7 b - - 0 1").unwrap();
    assert!(pos.is_stalemate(Color::Black));
}

#[test]
fn test_side_with_moves_is_not_stalemated() {
    let pos = Position::default();
    assert!(!pos.is_stalemate(Color::White));
    assert!(!pos.is_stalemate(Color::Black));
}
