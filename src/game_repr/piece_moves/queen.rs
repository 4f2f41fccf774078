use crate::game_repr::position::{BISHOP_DIRS, ROOK_DIRS};
use crate::game_repr::{Coord, MoveList, Position};

impl Position {
    pub fn queen_moves(&self, from: Coord) -> MoveList {
        let mut moves = self.ray_moves(from, &ROOK_DIRS);
        moves.extend(self.ray_moves(from, &BISHOP_DIRS));
        moves
    }
}
