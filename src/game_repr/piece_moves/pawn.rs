use crate::game_repr::{Coord, Kind, Move, MoveList, Position};

impl Position {
    pub fn pawn_moves(&self, from: Coord) -> MoveList {
        let piece = self.get(from);
        let us = piece.color;
        let dir = us.forward();
        let mut moves = MoveList::new();

        // Forward pushes. The double push needs both squares empty and the
        // pawn still on its starting rank.
        let one = from.offset(0, dir);
        if self.get(one).is_empty() && !one.is_null() {
            moves.push(Move::new(from, one));
            let start_rank = (us.home_rank() as i8 + dir) as u8;
            if from.rank == start_rank {
                let two = from.offset(0, 2 * dir);
                if self.get(two).is_empty() && !two.is_null() {
                    moves.push(Move::new(from, two));
                }
            }
        }

        // Diagonal captures.
        for df in [-1i8, 1] {
            let to = from.offset(df, dir);
            let target = self.get(to);
            if !target.is_empty() && target.color != us {
                moves.push(Move::new(from, to));
            }
        }

        // En passant: the opponent just double-pushed onto an adjacent file,
        // and the mover stands beside the pushed pawn. The capture lands on
        // the empty bypassed square.
        let them = us.opposite();
        let capture_rank = (them.home_rank() as i8 + 3 * them.forward()) as u8;
        if from.rank == capture_rank {
            if let Some(file) = self.en_passant[them.index()] {
                if (file as i8 - from.file as i8).abs() == 1 {
                    let victim = self.get(Coord::new(file, from.rank));
                    let to = Coord::new(file, (from.rank as i8 + dir) as u8);
                    if victim.kind == Kind::Pawn
                        && victim.color == them
                        && self.get(to).is_empty()
                    {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }

        moves
    }
}
