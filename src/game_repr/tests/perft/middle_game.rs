use super::*;

// A tactical middlegame with castling on both sides, pins, and checks.
const MIDDLE_GAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn test_perft_middle_game_depth_1() {
    let pos = Position::from_fen(MIDDLE_GAME).unwrap();
    assert_eq!(pos.perft(1), 48);
}

#[test]
fn test_perft_middle_game_depth_2() {
    let pos = Position::from_fen(MIDDLE_GAME).unwrap();
    assert_eq!(pos.perft(2), 2_039);
}
