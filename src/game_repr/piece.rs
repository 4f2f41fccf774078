#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    None,
}

impl Kind {
    /// Table index for occupied squares (used by hashing and evaluation).
    pub fn index(self) -> usize {
        match self {
            Kind::King => 0,
            Kind::Queen => 1,
            Kind::Rook => 2,
            Kind::Bishop => 3,
            Kind::Knight => 4,
            Kind::Pawn => 5,
            Kind::None => panic!("empty square has no kind index"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Evaluation sign: white-positive.
    pub fn sign(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Rank this color's pieces start on.
    pub fn home_rank(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Rank direction this color's pawns push toward.
    pub fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Rank where this color's pawns promote (the opponent's home rank).
    pub fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        color: Color::White,
        kind: Kind::None,
    };

    pub const fn new(color: Color, kind: Kind) -> Self {
        Self { color, kind }
    }

    pub fn is_empty(self) -> bool {
        self.kind == Kind::None
    }

    /// FEN piece letter; lowercase is black.
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => Kind::King,
            'q' => Kind::Queen,
            'r' => Kind::Rook,
            'b' => Kind::Bishop,
            'n' => Kind::Knight,
            'p' => Kind::Pawn,
            _ => return None,
        };
        Some(Self { color, kind })
    }

    pub fn to_char(self) -> char {
        let c = match self.kind {
            Kind::King => 'k',
            Kind::Queen => 'q',
            Kind::Rook => 'r',
            Kind::Bishop => 'b',
            Kind::Knight => 'n',
            Kind::Pawn => 'p',
            Kind::None => return ' ',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}
