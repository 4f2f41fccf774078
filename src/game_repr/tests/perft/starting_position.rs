use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    assert_eq!(Position::default().perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    assert_eq!(Position::default().perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    assert_eq!(Position::default().perft(3), 8_902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    assert_eq!(Position::default().perft(4), 197_281);
}
