// Move ordering
//
// Alpha-beta prunes best when the strongest move is searched first. The
// candidate list starts with the table's best move for this position when
// one is known, then every capture in generation order, then the quiet
// moves.

use smallvec::SmallVec;

use super::transposition::TranspositionTable;
use crate::game_repr::{Move, MoveList, Position};

pub fn ordered_moves(pos: &Position, tt: &TranspositionTable) -> MoveList {
    let entry = tt.get(pos.hash);
    let pv = if !entry.best_move.is_null() && pos.is_legal(entry.best_move) {
        Some(entry.best_move)
    } else {
        None
    };

    let mut captures: SmallVec<[Move; 16]> = SmallVec::new();
    let mut quiets: MoveList = SmallVec::new();
    for &at in pos.pieces(pos.side_to_move) {
        if at.is_null() {
            continue;
        }
        for mv in pos.legal_moves_from(at) {
            if Some(mv) == pv {
                continue;
            }
            if pos.is_capture(mv) {
                captures.push(mv);
            } else {
                quiets.push(mv);
            }
        }
    }

    let mut moves: MoveList = SmallVec::new();
    moves.extend(pv);
    moves.extend(captures);
    moves.extend(quiets);
    moves
}
