use super::*;

#[test]
fn test_fools_mate_from_the_start() {
    let mut pos = Position::default();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let m = mv(m);
        assert!(pos.is_legal(m));
        pos.make_move(m, true);
    }
    assert!(pos.in_check(Color::White));
    assert!(pos.is_checkmate(Color::White));
    assert!(!pos.is_checkmate(Color::Black));
    assert!(!pos.is_stalemate(Color::White));
}

#[test]
fn test_back_rank_mate() {
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(pos.is_checkmate(Color::Black));
}

#[test]
fn test_check_with_an_escape_is_not_mate() {
    // Same back-rank pattern, but h7 is open for the king.
    let pos = Position::from_fen("R5k1/5pp1/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(pos.in_check(Color::Black));
    assert!(!pos.is_checkmate(Color::Black));
    assert!(pos.is_legal(mv("g8h7")));
}

#[test]
fn test_a_block_or_capture_refutes_mate() {
    // The queen guards the back rank; Qxa8 saves black.
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/q7/8/6K1 b - - 0 1").unwrap();
    assert!(pos.in_check(Color::Black));
    assert!(!pos.is_checkmate(Color::Black));
    assert!(pos.is_legal(mv("a3a8")));
}
