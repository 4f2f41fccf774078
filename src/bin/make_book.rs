// Regenerates res/opening_book.bin from a fixed repertoire of standard
// opening lines. Hashes are computed with the engine's own position code,
// so the produced book always matches the running engine. Records are
// emitted for the plies the engine consults the book on, sorted ascending
// by hash as the Polyglot format requires.

use std::collections::BTreeSet;

use gambit::book::encode_move;
use gambit::engine::{BOOK_PATH, BOOK_PLY_LIMIT};
use gambit::game_repr::{Move, Position};

// Each line is six plies of a well-known opening, long enough to cover
// every ply the engine probes the book on. No line moves a king or rook,
// so castling rights stay intact throughout.
const LINES: &[&str] = &[
    // 1.e4 e5
    "e2e4 e7e5 g1f3 b8c6 f1b5 a7a6", // Ruy Lopez
    "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5", // Italian
    "e2e4 e7e5 g1f3 g8f6 f3e5 d7d6", // Petrov
    // 1.e4, other replies
    "e2e4 c7c5 g1f3 d7d6 d2d4 c5d4", // Sicilian
    "e2e4 c7c5 g1f3 b8c6 d2d4 c5d4", // Open Sicilian
    "e2e4 e7e6 d2d4 d7d5 b1c3 g8f6", // French
    "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4", // Caro-Kann
    "e2e4 d7d5 e4d5 d8d5 b1c3 d5a5", // Scandinavian
    // 1.d4
    "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6", // Queen's Gambit Declined
    "d2d4 d7d5 c2c4 c7c6 g1f3 g8f6", // Slav
    "d2d4 g8f6 c2c4 e7e6 b1c3 f8b4", // Nimzo-Indian
    "d2d4 g8f6 c2c4 g7g6 b1c3 f8g7", // King's Indian
    "d2d4 f7f5 g2g3 g8f6 f1g2 g7g6", // Dutch
    // Flank openings
    "c2c4 e7e5 b1c3 g8f6 g1f3 b8c6", // English
    "g1f3 d7d5 d2d4 g8f6 c2c4 e7e6", // Reti into Catalan lines
];

fn main() {
    env_logger::init();

    let mut records: BTreeSet<(u64, u16)> = BTreeSet::new();
    for line in LINES {
        let mut pos = Position::default();
        for (ply, alg) in line.split_whitespace().enumerate() {
            let mv = Move::from_alg(alg).expect("repertoire move parses");
            assert!(pos.is_legal(mv), "illegal repertoire move {alg} in {line}");
            if ply as u32 <= BOOK_PLY_LIMIT {
                records.insert((pos.hash, encode_move(mv)));
            }
            pos.make_move(mv, true);
        }
    }

    // BTreeSet iteration is already (hash, move)-ascending.
    let mut bytes = Vec::with_capacity(records.len() * 16);
    for (hash, raw_move) in &records {
        bytes.extend_from_slice(&hash.to_be_bytes());
        bytes.extend_from_slice(&raw_move.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes()); // weight
        bytes.extend_from_slice(&0u32.to_be_bytes()); // learn
    }

    std::fs::write(BOOK_PATH, &bytes).expect("write opening book");
    println!("wrote {} records to {BOOK_PATH}", records.len());
}
