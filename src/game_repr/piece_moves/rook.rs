use crate::game_repr::position::ROOK_DIRS;
use crate::game_repr::{Coord, MoveList, Position};

impl Position {
    pub fn rook_moves(&self, from: Coord) -> MoveList {
        self.ray_moves(from, &ROOK_DIRS)
    }
}
