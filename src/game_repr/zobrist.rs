// Zobrist position hashing
//
// The key table is derived from a fixed seed so every run of the engine (and
// the book generator, which links the same code) agrees on position hashes.
// One xorshift64 stream fills the piece keys, then the castling keys, then
// the en-passant file keys, then the turn key, in that order; reordering the
// stream invalidates every shipped opening book.

use once_cell::sync::Lazy;

use super::{Color, Position, Wing};

const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

pub struct Zobrist {
    /// [kind][color][square], kinds in `Kind::index` order.
    pub pieces: [[[u64; 64]; 2]; 6],
    /// [color * 2 + wing]: white king-side, white queen-side, then black.
    pub castling: [u64; 4],
    /// One key per en-passant target file.
    pub en_passant: [u64; 8],
    /// XORed in when black is to move.
    pub turn: u64,
}

impl Zobrist {
    fn generate() -> Self {
        let mut state = SEED;
        let mut next = || {
            state = xorshift64(state);
            state
        };

        let mut pieces = [[[0u64; 64]; 2]; 6];
        for kind in pieces.iter_mut() {
            for color in kind.iter_mut() {
                for square in color.iter_mut() {
                    *square = next();
                }
            }
        }

        let mut castling = [0u64; 4];
        for key in castling.iter_mut() {
            *key = next();
        }

        let mut en_passant = [0u64; 8];
        for key in en_passant.iter_mut() {
            *key = next();
        }

        Self {
            pieces,
            castling,
            en_passant,
            turn: next(),
        }
    }
}

pub static ZOBRIST: Lazy<Zobrist> = Lazy::new(Zobrist::generate);

impl Position {
    /// Full-position digest: piece placement, castling availability, live
    /// en-passant targets, and the side to move.
    pub fn compute_hash(&self) -> u64 {
        let z = &*ZOBRIST;
        let mut hash = 0u64;

        for square in 0..64 {
            let piece = self.board[square];
            if !piece.is_empty() {
                hash ^= z.pieces[piece.kind.index()][piece.color.index()][square];
            }
        }

        for color in [Color::White, Color::Black] {
            for wing in [Wing::King, Wing::Queen] {
                if self.castling_right(color, wing) {
                    hash ^= z.castling[color.index() * 2 + wing.index()];
                }
            }
            if let Some(file) = self.en_passant[color.index()] {
                hash ^= z.en_passant[file as usize];
            }
        }

        if self.side_to_move == Color::Black {
            hash ^= z.turn;
        }

        hash
    }
}
