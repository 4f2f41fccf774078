// Opening book
//
// Polyglot BIN reader: a stream of 16-byte big-endian records
// {u64 hash, u16 move, u16 weight, u32 learn}, sorted ascending by hash.
// The move field packs five 3-bit fields from the least significant bit:
// to-file, to-rank, from-file, from-rank, promotion piece. Ranks in the
// file are bottom-origin and get mirrored into the engine's top-origin
// scheme. Only promotions "none" and "queen" exist in this engine; records
// carrying any other promotion are skipped.
//
// Consecutive records with the same hash coalesce into one entry holding
// all the response moves, so a lookup is one binary search.

use std::fs;
use std::path::Path;

use log::warn;
use rand::Rng;
use thiserror::Error;

use crate::game_repr::{Coord, Move};

const RECORD_SIZE: usize = 16;

/// Most response moves kept per position; the rest are discarded.
const MAX_MOVES_PER_ENTRY: usize = 255;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read opening book: {0}")]
    Io(#[from] std::io::Error),
    #[error("book length {0} is not a multiple of the record size")]
    Truncated(usize),
    #[error("book holds no usable records")]
    Empty,
    #[error("book records are not sorted by hash (record {0})")]
    Unsorted(usize),
}

#[derive(Debug)]
pub struct BookEntry {
    pub hash: u64,
    pub moves: Vec<Move>,
}

pub struct OpeningBook {
    entries: Vec<BookEntry>,
}

impl OpeningBook {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let bytes = fs::read(path)?;
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(BookError::Truncated(bytes.len()));
        }

        let mut entries: Vec<BookEntry> = Vec::new();
        for (index, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
            let hash = u64::from_be_bytes(record[0..8].try_into().unwrap());
            let raw_move = u16::from_be_bytes(record[8..10].try_into().unwrap());
            // Weight and learn fields are not used by this engine.

            let Some(mv) = decode_move(raw_move) else {
                warn!("skipping book record {index} with unsupported promotion");
                continue;
            };

            let coalesce = match entries.last() {
                Some(last) if last.hash == hash => true,
                Some(last) if last.hash > hash => return Err(BookError::Unsorted(index)),
                _ => false,
            };
            if coalesce {
                if let Some(last) = entries.last_mut() {
                    if last.moves.len() < MAX_MOVES_PER_ENTRY && !last.moves.contains(&mv) {
                        last.moves.push(mv);
                    }
                }
            } else {
                entries.push(BookEntry {
                    hash,
                    moves: vec![mv],
                });
            }
        }

        if entries.is_empty() {
            return Err(BookError::Empty);
        }
        Ok(Self { entries })
    }

    /// Binary search for the entry holding `hash`.
    pub fn find(&self, hash: u64) -> Option<&BookEntry> {
        self.entries
            .binary_search_by(|entry| entry.hash.cmp(&hash))
            .ok()
            .map(|index| &self.entries[index])
    }

    /// One of the entry's moves, uniformly at random.
    pub fn pick(&self, hash: u64, rng: &mut impl Rng) -> Option<Move> {
        let entry = self.find(hash)?;
        Some(entry.moves[rng.gen_range(0..entry.moves.len())])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }
}

/// Unpack a Polyglot move field, mirroring bottom-origin ranks. Returns
/// None for promotion codes this engine does not play (only none=0 and
/// queen=4 are accepted).
fn decode_move(raw: u16) -> Option<Move> {
    let promotion = (raw >> 12) & 0x7;
    if promotion != 0 && promotion != 4 {
        return None;
    }
    let to_file = (raw & 0x7) as u8;
    let to_rank = ((raw >> 3) & 0x7) as u8;
    let from_file = ((raw >> 6) & 0x7) as u8;
    let from_rank = ((raw >> 9) & 0x7) as u8;
    Some(Move::new(
        Coord::new(from_file, 7 - from_rank),
        Coord::new(to_file, 7 - to_rank),
    ))
}

/// Pack a move into the Polyglot field layout (promotion code 0).
pub fn encode_move(mv: Move) -> u16 {
    (mv.to.file as u16)
        | (((7 - mv.to.rank) as u16) << 3)
        | ((mv.from.file as u16) << 6)
        | (((7 - mv.from.rank) as u16) << 9)
}
