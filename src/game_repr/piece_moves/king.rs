use crate::game_repr::position::KING_STEPS;
use crate::game_repr::{Coord, Kind, Move, MoveList, Position, Wing};

impl Position {
    pub fn king_moves(&self, from: Coord) -> MoveList {
        let us = self.get(from).color;
        let them = us.opposite();
        let mut moves = MoveList::new();

        for &(df, dr) in &KING_STEPS {
            let to = from.offset(df, dr);
            if to.is_null() {
                continue;
            }
            let target = self.get(to);
            if target.is_empty() || target.color != us {
                moves.push(Move::new(from, to));
            }
        }

        // Castling, encoded as a two-file king step. The transit squares and
        // the king's own square must be unattacked; on the queen side the
        // b-file square only has to be empty.
        let home = Coord::new(4, us.home_rank());
        if from != home {
            return moves;
        }
        let rank = home.rank;

        if self.castling_right(us, Wing::King) {
            let rook = self.get(Wing::King.rook_home(us));
            if rook.kind == Kind::Rook
                && rook.color == us
                && self.get(Coord::new(5, rank)).is_empty()
                && self.get(Coord::new(6, rank)).is_empty()
                && !self.is_attacked(Coord::new(4, rank), them)
                && !self.is_attacked(Coord::new(5, rank), them)
                && !self.is_attacked(Coord::new(6, rank), them)
            {
                moves.push(Move::new(from, Coord::new(6, rank)));
            }
        }

        if self.castling_right(us, Wing::Queen) {
            let rook = self.get(Wing::Queen.rook_home(us));
            if rook.kind == Kind::Rook
                && rook.color == us
                && self.get(Coord::new(1, rank)).is_empty()
                && self.get(Coord::new(2, rank)).is_empty()
                && self.get(Coord::new(3, rank)).is_empty()
                && !self.is_attacked(Coord::new(4, rank), them)
                && !self.is_attacked(Coord::new(3, rank), them)
                && !self.is_attacked(Coord::new(2, rank), them)
            {
                moves.push(Move::new(from, Coord::new(2, rank)));
            }
        }

        moves
    }
}
