// Pseudo-legal move patterns, one module per piece kind.
//
// Generators check pattern shape, blocking pieces, and the castling
// transit-attack rules; they do not check whether the mover's own king ends
// up attacked. That final criterion lives in `Position::is_legal`.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::{Coord, Kind, Move, MoveList, Position};

impl Position {
    /// Walk sliding rays from `from`, stopping at the first piece and
    /// including it when it belongs to the opponent.
    pub(crate) fn ray_moves(&self, from: Coord, dirs: &[(i8, i8)]) -> MoveList {
        let us = self.get(from).color;
        let mut moves = MoveList::new();
        for &(df, dr) in dirs {
            let mut at = from.offset(df, dr);
            while !at.is_null() {
                let piece = self.get(at);
                if piece.is_empty() {
                    moves.push(Move::new(from, at));
                } else {
                    if piece.color != us {
                        moves.push(Move::new(from, at));
                    }
                    break;
                }
                at = at.offset(df, dr);
            }
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `from`, empty for an empty square.
    pub fn moves_from(&self, from: Coord) -> MoveList {
        match self.get(from).kind {
            Kind::King => self.king_moves(from),
            Kind::Queen => self.queen_moves(from),
            Kind::Rook => self.rook_moves(from),
            Kind::Bishop => self.bishop_moves(from),
            Kind::Knight => self.knight_moves(from),
            Kind::Pawn => self.pawn_moves(from),
            Kind::None => MoveList::new(),
        }
    }

    /// Whether `mv` matches the moving piece's pattern: shape, path
    /// blocking, en-passant and double-push preconditions, castling rights
    /// and transit attacks.
    pub fn is_possible(&self, mv: Move) -> bool {
        !self.get(mv.from).is_empty() && self.moves_from(mv.from).contains(&mv)
    }
}
