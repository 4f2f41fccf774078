// Negamax search with alpha-beta pruning
//
// One function searches for both sides by negating child scores. Scores are
// from the side to move's perspective. The table is probed before anything
// else: an exact hit returns immediately, bounds tighten the window. Every
// searched node stores its result back with the bound classification taken
// against the window it started with.
//
// i32::MIN is reserved as the timeout poison: a node that sees the clock
// expired returns ABORTED and every ancestor unwinds without writing to the
// table. Legitimate scores never reach it, so negation is always safe.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::evaluation::evaluate;
use super::move_ordering::ordered_moves;
use super::transposition::{Bound, TableEntry, TranspositionTable};
use crate::game_repr::{Move, Position};

/// Timeout poison. Callers must test for it before negating.
pub const ABORTED: i32 = i32::MIN;

/// Score for delivering checkmate; negated when on the receiving end.
pub const MATE_VALUE: i32 = 1_000_000;

/// Everything a search task needs besides the position itself.
pub struct SearchContext {
    pub tt: Arc<TranspositionTable>,
    pub start: Instant,
    pub budget: Duration,
}

impl SearchContext {
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

pub fn negamax(pos: &Position, mut alpha: i32, mut beta: i32, depth: u8, ctx: &SearchContext) -> i32 {
    let alpha_initial = alpha;

    let entry = ctx.tt.get(pos.hash);
    if !entry.is_null() && entry.depth >= depth {
        match entry.bound {
            Bound::Exact => return entry.value,
            Bound::Lower => alpha = alpha.max(entry.value),
            Bound::Upper => beta = beta.min(entry.value),
        }
        if alpha >= beta {
            return entry.value;
        }
    }

    let us = pos.side_to_move;
    if pos.is_checkmate(us) {
        return -MATE_VALUE;
    }
    if pos.is_checkmate(us.opposite()) {
        return MATE_VALUE;
    }
    if pos.is_stalemate(us) {
        return 0;
    }

    if depth == 0 {
        return evaluate(pos) * us.sign();
    }

    if ctx.expired() {
        return ABORTED;
    }

    let mut best_value = ABORTED + 1;
    let mut best_move = Move::NULL;
    for mv in ordered_moves(pos, &ctx.tt) {
        let mut child = pos.clone();
        child.make_move(mv, true);
        let score = negamax(&child, -beta, -alpha, depth - 1, ctx);
        if score == ABORTED {
            return ABORTED;
        }
        let score = -score;
        if score > best_value {
            best_value = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    let bound = if best_value <= alpha_initial {
        Bound::Upper
    } else if best_value >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.tt.put(TableEntry {
        hash: pos.hash,
        best_move,
        depth,
        value: best_value,
        bound,
    });

    best_value
}

/// The full window: wide enough to hold every mate score, narrow enough
/// that negating either edge cannot overflow.
pub fn full_window() -> (i32, i32) {
    (-(MATE_VALUE + 1), MATE_VALUE + 1)
}
