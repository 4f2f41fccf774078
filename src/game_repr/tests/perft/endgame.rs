use super::*;

// A rook-and-pawns endgame with en-passant chances on both sides.
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn test_perft_endgame_depth_1() {
    let pos = Position::from_fen(ENDGAME).unwrap();
    assert_eq!(pos.perft(1), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    let pos = Position::from_fen(ENDGAME).unwrap();
    assert_eq!(pos.perft(2), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    let pos = Position::from_fen(ENDGAME).unwrap();
    assert_eq!(pos.perft(3), 2_812);
}
