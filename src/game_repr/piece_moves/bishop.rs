use crate::game_repr::position::BISHOP_DIRS;
use crate::game_repr::{Coord, MoveList, Position};

impl Position {
    pub fn bishop_moves(&self, from: Coord) -> MoveList {
        self.ray_moves(from, &BISHOP_DIRS)
    }
}
