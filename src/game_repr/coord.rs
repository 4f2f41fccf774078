// Board coordinates
//
// Files run 0..8 left to right, ranks run 0..8 from the top of the board
// (rank 0 is black's home rank). Offsetting a coordinate off the board
// saturates to the NULL sentinel, so ray walks and jump tables can probe
// without bounds arithmetic at every call site.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    /// Off-board sentinel. Any offset that leaves the board produces it.
    pub const NULL: Coord = Coord { file: 15, rank: 15 };

    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Flat board index (rank-major). Only valid for on-board coordinates.
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Offset by (file, rank) deltas, saturating to NULL off the board.
    pub fn offset(self, df: i8, dr: i8) -> Coord {
        if self.is_null() {
            return Self::NULL;
        }
        let file = self.file as i16 + df as i16;
        let rank = self.rank as i16 + dr as i16;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Coord::new(file as u8, rank as u8)
        } else {
            Self::NULL
        }
    }

    /// Parse algebraic square notation ("e4"). Ranks in the notation are
    /// bottom-origin and get mirrored into the engine's top-origin scheme.
    pub fn from_alg(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].checked_sub(b'a')?;
        let digit = bytes[1].checked_sub(b'1')?;
        if file > 7 || digit > 7 {
            return None;
        }
        Some(Coord::new(file, 7 - digit))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "--");
        }
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'1' + (7 - self.rank)) as char
        )
    }
}
