// Move representation
//
// A move is a plain (from, to) coordinate pair. Everything else is implied
// by the position it is applied to: a two-file king step is castling, a pawn
// diagonal onto an empty square is an en-passant capture, and a pawn arriving
// on its last rank promotes to a queen.

use std::fmt;

use smallvec::SmallVec;

use super::Coord;

/// Move list kept inline on the hot path; a full position never exceeds the
/// inline capacity, so generation and ordering stay off the heap.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    /// The "no move" sentinel used by empty transposition entries.
    pub const NULL: Move = Move {
        from: Coord::NULL,
        to: Coord::NULL,
    };

    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    pub fn is_null(self) -> bool {
        self.from.is_null()
    }

    /// Parse coordinate notation ("e2e4").
    pub fn from_alg(s: &str) -> Option<Move> {
        if s.len() != 4 {
            return None;
        }
        Some(Move::new(
            Coord::from_alg(s.get(..2)?)?,
            Coord::from_alg(s.get(2..)?)?,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
