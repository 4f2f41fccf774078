// Static position evaluation
//
// Returns a score in centipawns from white's perspective (positive favors
// white). Terminal positions are not this module's business; the search
// detects mate and stalemate before asking for a score.

use crate::game_repr::{Color, Coord, Kind, Position, Wing, KING_STEPS};

// Material values in centipawns
const KING_VALUE: i32 = 20_000;
const QUEEN_VALUE: i32 = 900;
const ROOK_VALUE: i32 = 500;
const BISHOP_VALUE: i32 = 330;
const KNIGHT_VALUE: i32 = 320;
const PAWN_VALUE: i32 = 100;

/// Being in check.
const CHECK_PENALTY: i32 = 30;
/// Each castling availability still standing.
const CASTLE_RIGHT_BONUS: i32 = 1;
/// Each friendly piece shielding its own king.
const KING_SHIELD_BONUS: i32 = 10;
/// Occupying the inner four central squares.
const CENTER_INNER_BONUS: i32 = 5;
/// Occupying the outer ring of the central 4x4 block.
const CENTER_OUTER_BONUS: i32 = 2;

pub fn piece_value(kind: Kind) -> i32 {
    match kind {
        Kind::King => KING_VALUE,
        Kind::Queen => QUEEN_VALUE,
        Kind::Rook => ROOK_VALUE,
        Kind::Bishop => BISHOP_VALUE,
        Kind::Knight => KNIGHT_VALUE,
        Kind::Pawn => PAWN_VALUE,
        Kind::None => 0,
    }
}

pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0;

    for rank in 0..8u8 {
        for file in 0..8u8 {
            let piece = pos.get(Coord::new(file, rank));
            if piece.is_empty() {
                continue;
            }
            let sign = piece.color.sign();
            score += sign * piece_value(piece.kind);
            if (2..=5).contains(&file) && (2..=5).contains(&rank) {
                if (3..=4).contains(&file) && (3..=4).contains(&rank) {
                    score += sign * CENTER_INNER_BONUS;
                } else {
                    score += sign * CENTER_OUTER_BONUS;
                }
            }
        }
    }

    for color in [Color::White, Color::Black] {
        let sign = color.sign();

        if pos.in_check(color) {
            score -= sign * CHECK_PENALTY;
        }

        for wing in [Wing::King, Wing::Queen] {
            if pos.castling_right(color, wing) {
                score += sign * CASTLE_RIGHT_BONUS;
            }
        }

        let king = pos.king(color);
        for &(df, dr) in &KING_STEPS {
            let neighbor = pos.get(king.offset(df, dr));
            if !neighbor.is_empty() && neighbor.color == color {
                score += sign * KING_SHIELD_BONUS;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Piece;

    #[test]
    fn test_starting_position_is_balanced() {
        let pos = Position::default();
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn test_missing_pawn_costs_its_material() {
        let mut pos = Position::default();
        // a7 is outside the central block and not adjacent to the black king.
        pos.put(Coord::from_alg("a7").unwrap(), Piece::EMPTY);
        pos.refresh();
        assert_eq!(evaluate(&pos), PAWN_VALUE);
    }

    #[test]
    fn test_check_term() {
        // White king checked by a black rook along the back rank.
        let with_check = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
        let without_check = Position::from_fen("4k3/8/8/8/8/8/1r6/4K3 w - - 0 1").unwrap();
        assert!(with_check.in_check(Color::White));
        assert!(!without_check.in_check(Color::White));
        assert_eq!(evaluate(&with_check) + CHECK_PENALTY, evaluate(&without_check));
    }

    #[test]
    fn test_castling_rights_term() {
        let all = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let white_only = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        assert_eq!(evaluate(&all), 0);
        assert_eq!(evaluate(&white_only), 2 * CASTLE_RIGHT_BONUS);
    }

    #[test]
    fn test_central_occupation_term() {
        // Kings on their home squares, one white knight either outside the
        // center, on the outer ring, or on an inner square.
        let outside = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
        let ring = Position::from_fen("4k3/8/8/2N5/8/8/8/4K3 w - - 0 1").unwrap();
        let inner = Position::from_fen("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&ring) - evaluate(&outside), CENTER_OUTER_BONUS);
        assert_eq!(evaluate(&inner) - evaluate(&outside), CENTER_INNER_BONUS);
    }

    #[test]
    fn test_king_shield_term() {
        let bare = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let shielded = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(
            evaluate(&shielded) - evaluate(&bare),
            PAWN_VALUE + KING_SHIELD_BONUS
        );
    }
}
