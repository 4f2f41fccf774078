// Iterative deepening over the worker pool (Lazy SMP)
//
// One root-search task per depth is queued on the pool. Every task runs the
// same negamax over the shared transposition table, so deeper tasks inherit
// the shallower tasks' entries and best moves without any coordination
// between threads. Whatever depth completes last before the budget expires
// leaves the root entry the facade picks up.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use super::negamax::{full_window, negamax, SearchContext, ABORTED};
use super::transposition::{Bound, TableEntry, TranspositionTable};
use crate::game_repr::{Move, MoveList, Position};
use crate::pool::WorkerPool;

/// Deepest iteration dispatched per search request.
pub const MAX_DEPTH: u8 = 8;

/// Wall-clock budget of one search request.
pub const MAX_SEARCH_TIME: Duration = Duration::from_millis(2_000);

/// Sentinel depth marking a table entry as an opening-book verdict.
pub const BOOK_DEPTH: u8 = u8::MAX;

/// Search the root moves at `depth` and record an exact root entry with the
/// best move found. An expired budget abandons the iteration without
/// touching the table, leaving the previous depth's entry in place.
pub fn root_search(root: &Position, moves: &[Move], depth: u8, ctx: &SearchContext) {
    if moves.is_empty() {
        return;
    }

    // Current best move first; later iterations start from the move the
    // previous one liked.
    let entry = ctx.tt.get(root.hash);
    let mut ordered: MoveList = MoveList::new();
    if moves.contains(&entry.best_move) {
        ordered.push(entry.best_move);
    }
    ordered.extend(moves.iter().copied().filter(|&m| m != entry.best_move));

    let (mut alpha, beta) = full_window();
    let mut best_value = ABORTED + 1;
    let mut best_move = Move::NULL;
    for &mv in &ordered {
        let mut child = root.clone();
        child.make_move(mv, true);
        let score = negamax(&child, -beta, -alpha, depth - 1, ctx);
        if score == ABORTED {
            return;
        }
        let score = -score;
        if score > best_value {
            best_value = score;
            best_move = mv;
        }
        alpha = alpha.max(score);
    }

    ctx.tt.put(TableEntry {
        hash: root.hash,
        best_move,
        depth,
        value: best_value,
        bound: Bound::Exact,
    });
    debug!(
        "depth {depth}: {best_move} value {best_value} ({} ms)",
        ctx.start.elapsed().as_millis()
    );
}

/// Queue one root search per depth 1..=MAX_DEPTH. Workers share the root
/// snapshot and its legal-move list by refcount; the last one to finish
/// frees them.
pub fn dispatch(
    pool: &WorkerPool,
    root: Arc<Position>,
    moves: Arc<MoveList>,
    tt: Arc<TranspositionTable>,
    start: Instant,
    budget: Duration,
) {
    for depth in 1..=MAX_DEPTH {
        let root = Arc::clone(&root);
        let moves = Arc::clone(&moves);
        let tt = Arc::clone(&tt);
        pool.submit(move || {
            let ctx = SearchContext { tt, start, budget };
            root_search(&root, &moves, depth, &ctx);
        });
    }
}
