use crate::game_repr::position::KNIGHT_JUMPS;
use crate::game_repr::{Coord, Move, MoveList, Position};

impl Position {
    pub fn knight_moves(&self, from: Coord) -> MoveList {
        let us = self.get(from).color;
        let mut moves = MoveList::new();
        for &(df, dr) in &KNIGHT_JUMPS {
            let to = from.offset(df, dr);
            if to.is_null() {
                continue;
            }
            let target = self.get(to);
            if target.is_empty() || target.color != us {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
