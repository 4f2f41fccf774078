// FEN parsing and serialization
//
// Only the feature subset the engine models round-trips: piece placement,
// side to move, castling availability, and the en-passant target. The
// halfmove clock is accepted and discarded; the fullmove number seeds the
// ply counter.

use thiserror::Error;

use super::{Color, Coord, Kind, Piece, Position, Wing};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("expected 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("rank {0} does not describe 8 files")]
    BadFileCount(u8),
    #[error("invalid piece character {0:?}")]
    BadPiece(char),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
    #[error("invalid castling character {0:?}")]
    BadCastling(char),
    #[error("invalid en-passant square {0:?}")]
    BadEnPassant(String),
    #[error("invalid move counter {0:?}")]
    BadCounter(String),
    #[error("expected exactly one {0:?} king, found {1}")]
    BadKingCount(Color, usize),
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingField("placement"))?;
        let side = fields.next().ok_or(FenError::MissingField("side to move"))?;
        let castling = fields.next().unwrap_or("-");
        let en_passant = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let mut pos = Position::empty();

        // FEN lists ranks from black's home rank down, which is exactly the
        // engine's rank order.
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }
        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0u32;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::BadPiece(c))?;
                    if file > 7 {
                        return Err(FenError::BadFileCount(rank as u8));
                    }
                    pos.put(Coord::new(file as u8, rank as u8), piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadFileCount(rank as u8));
                }
            }
            if file != 8 {
                return Err(FenError::BadFileCount(rank as u8));
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = pos
                .board
                .iter()
                .filter(|p| p.kind == Kind::King && p.color == color)
                .count();
            if kings != 1 {
                return Err(FenError::BadKingCount(color, kings));
            }
        }

        pos.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        if castling != "-" {
            for c in castling.chars() {
                let (color, wing) = match c {
                    'K' => (Color::White, Wing::King),
                    'Q' => (Color::White, Wing::Queen),
                    'k' => (Color::Black, Wing::King),
                    'q' => (Color::Black, Wing::Queen),
                    other => return Err(FenError::BadCastling(other)),
                };
                pos.castling[color.index()][wing.index()] = true;
            }
        }

        if en_passant != "-" {
            let square = Coord::from_alg(en_passant)
                .ok_or_else(|| FenError::BadEnPassant(en_passant.to_string()))?;
            // The target square sits behind the pushed pawn: engine rank 5
            // after a white double push, rank 2 after a black one.
            let color = match square.rank {
                5 => Color::White,
                2 => Color::Black,
                _ => return Err(FenError::BadEnPassant(en_passant.to_string())),
            };
            pos.en_passant[color.index()] = Some(square.file);
        }

        halfmove
            .parse::<u32>()
            .map_err(|_| FenError::BadCounter(halfmove.to_string()))?;
        let fullmove = fullmove
            .parse::<u32>()
            .map_err(|_| FenError::BadCounter(fullmove.to_string()))?;
        pos.ply = fullmove.saturating_sub(1) * 2
            + match pos.side_to_move {
                Color::White => 0,
                Color::Black => 1,
            };

        pos.refresh();
        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for rank in 0..8u8 {
            let mut empty = 0;
            for file in 0..8u8 {
                let piece = self.get(Coord::new(file, rank));
                if piece.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.to_char());
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut rights = String::new();
        for (color, chars) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            for (wing, c) in [Wing::King, Wing::Queen].into_iter().zip(chars) {
                if self.castling_right(color, wing) {
                    rights.push(c);
                }
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        fen.push_str(&rights);

        // Only the opponent of the side to move can have a capturable
        // double-push on the board.
        fen.push(' ');
        let pusher = self.side_to_move.opposite();
        match self.en_passant[pusher.index()] {
            Some(file) => {
                let rank = match pusher {
                    Color::White => 5,
                    Color::Black => 2,
                };
                fen.push_str(&Coord::new(file, rank).to_string());
            }
            None => fen.push('-'),
        }

        fen.push_str(&format!(" 0 {}", self.ply / 2 + 1));
        fen
    }
}
