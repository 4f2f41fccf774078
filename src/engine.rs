// Engine facade
//
// Owns the live game position, the shared transposition table, the opening
// book, and the worker pool. A move request protects the root hash, tries
// the book for the first few plies, and otherwise fans iterative deepening
// out to the workers; the caller polls until the budget has elapsed and the
// deepest completed root entry is taken as the answer.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::book::{BookError, OpeningBook};
use crate::game_repr::{Color, Coord, FenError, Move, Position, ZOBRIST};
use crate::pool::WorkerPool;
use crate::search::{
    dispatch, Bound, TableEntry, TranspositionTable, BOOK_DEPTH, MAX_SEARCH_TIME,
};

/// Default location of the opening book, relative to the working directory.
pub const BOOK_PATH: &str = "res/opening_book.bin";

/// Last ply on which the opening book is consulted.
pub const BOOK_PLY_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    None,
    WhiteWin,
    BlackWin,
    Draw,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("opening book unusable: {0}")]
    Book(#[from] BookError),
}

pub struct Engine {
    position: Position,
    tt: Arc<TranspositionTable>,
    book: OpeningBook,
    pool: WorkerPool,
    rng: StdRng,
    budget: Duration,
    deadline: Option<Instant>,
}

impl Engine {
    /// Load the book, force the Zobrist table, and set up an empty
    /// transposition table with a pool sized to the machine. A missing or
    /// empty book is fatal.
    pub fn init(book_path: impl AsRef<Path>) -> Result<Self, EngineError> {
        Self::with_pool(book_path, WorkerPool::new())
    }

    /// Deterministic variant: no worker threads, searches run on the
    /// calling thread.
    pub fn init_single_threaded(book_path: impl AsRef<Path>) -> Result<Self, EngineError> {
        Self::with_pool(book_path, WorkerPool::inline())
    }

    fn with_pool(book_path: impl AsRef<Path>, pool: WorkerPool) -> Result<Self, EngineError> {
        let book = OpeningBook::load(book_path)?;
        info!("opening book loaded with {} positions", book.len());
        once_cell::sync::Lazy::force(&ZOBRIST);
        Ok(Self {
            position: Position::default(),
            tt: Arc::new(TranspositionTable::new()),
            book,
            pool,
            rng: StdRng::from_entropy(),
            budget: MAX_SEARCH_TIME,
            deadline: None,
        })
    }

    /// Reset to the starting position and drop every cached search result.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.position = Position::default();
        self.deadline = None;
    }

    /// Replace the position. A parse failure leaves the engine untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        self.position = Position::from_fen(fen)?;
        self.deadline = None;
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Seed the book-pick RNG; with the single-threaded pool this makes the
    /// whole engine deterministic.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn set_budget(&mut self, budget: Duration) {
        self.budget = budget;
    }

    /// Validate and apply a move for the side to move. An illegal move is
    /// rejected and the position stays as it was.
    pub fn submit_human_move(&mut self, from: Coord, to: Coord) -> bool {
        let mv = Move::new(from, to);
        if !self.position.is_legal(mv) {
            return false;
        }
        self.position.make_move(mv, true);
        true
    }

    /// Start choosing a move for the side to move. Returns immediately;
    /// the caller polls `poll_engine_move` for the result.
    pub fn request_engine_move(&mut self) {
        self.choose_move();
    }

    /// Book first, search otherwise. Either way the answer lands in the
    /// transposition table at the protected root hash.
    fn choose_move(&mut self) {
        let root_hash = self.position.hash;
        self.tt.set_protected(root_hash);
        let start = Instant::now();

        if self.position.ply <= BOOK_PLY_LIMIT {
            if let Some(mv) = self.book.pick(root_hash, &mut self.rng) {
                // A stored hash can collide with a foreign position, so the
                // book's move is trusted only after a legality check.
                if self.position.is_legal(mv) {
                    info!("book move {mv} at ply {}", self.position.ply);
                    self.tt.put(TableEntry {
                        hash: root_hash,
                        best_move: mv,
                        depth: BOOK_DEPTH,
                        value: 0,
                        bound: Bound::Exact,
                    });
                    self.deadline = Some(start);
                    return;
                }
                debug!("book move {mv} illegal here, falling back to search");
            }
        }

        let moves = self.position.all_legal_moves();
        if moves.is_empty() {
            self.deadline = None;
            return;
        }
        dispatch(
            &self.pool,
            Arc::new(self.position.clone()),
            Arc::new(moves),
            Arc::clone(&self.tt),
            start,
            self.budget,
        );
        self.deadline = Some(start + self.budget);
    }

    /// The chosen move once the budget has elapsed (immediately for book
    /// hits and inline pools), applied to the game; None while the search
    /// is still running or none was requested.
    pub fn poll_engine_move(&mut self) -> Option<Move> {
        let deadline = self.deadline?;
        let entry = self.tt.get(self.position.hash);
        let expired = self.pool.is_inline() || Instant::now() >= deadline;
        if entry.depth == BOOK_DEPTH || (expired && !entry.best_move.is_null()) {
            self.deadline = None;
            self.position.make_move(entry.best_move, true);
            return Some(entry.best_move);
        }
        if expired {
            // Budget gone with no completed depth; nothing to play.
            self.deadline = None;
        }
        None
    }

    /// Blocking convenience over request + poll. Returns None when the side
    /// to move has no legal moves.
    pub fn search_best_move(&mut self) -> Option<Move> {
        self.request_engine_move();
        while self.deadline.is_some() {
            if let Some(mv) = self.poll_engine_move() {
                return Some(mv);
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    pub fn game_result(&self) -> GameResult {
        let side = self.position.side_to_move;
        if self.position.is_checkmate(side) {
            return match side {
                Color::White => GameResult::BlackWin,
                Color::Black => GameResult::WhiteWin,
            };
        }
        if self.position.is_stalemate(side) {
            return GameResult::Draw;
        }
        GameResult::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/opening_book.bin");

    fn engine() -> Engine {
        let mut engine = Engine::init_single_threaded(BOOK).unwrap();
        engine.seed_rng(42);
        engine.set_budget(Duration::from_millis(500));
        engine
    }

    #[test]
    fn test_missing_book_is_fatal() {
        assert!(Engine::init_single_threaded("res/no_such_book.bin").is_err());
    }

    #[test]
    fn test_book_answers_the_opening_instantly() {
        let mut engine = engine();
        engine.request_engine_move();
        let mv = engine.poll_engine_move().expect("book hit is ready at once");
        // The shipped repertoire opens 1.e4, 1.d4, 1.c4 or 1.Nf3.
        let openings: Vec<Move> = ["e2e4", "d2d4", "c2c4", "g1f3"]
            .iter()
            .map(|s| Move::from_alg(s).unwrap())
            .collect();
        assert!(openings.contains(&mv));
        assert_eq!(engine.position().side_to_move, Color::Black);
    }

    #[test]
    fn test_legal_and_illegal_submissions() {
        let mut engine = engine();
        assert!(!engine.submit_human_move(
            Coord::from_alg("e2").unwrap(),
            Coord::from_alg("e5").unwrap()
        ));
        assert_eq!(engine.position().side_to_move, Color::White);
        assert!(engine.submit_human_move(
            Coord::from_alg("e2").unwrap(),
            Coord::from_alg("e4").unwrap()
        ));
        assert_eq!(engine.position().side_to_move, Color::Black);
    }

    #[test]
    fn test_search_finds_mate_in_one() {
        let mut engine = engine();
        engine.load_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mv = engine.search_best_move().expect("a move exists");
        assert_eq!(mv, Move::from_alg("a1a8").unwrap());
        assert_eq!(engine.game_result(), GameResult::WhiteWin);
    }

    #[test]
    fn test_game_results() {
        let mut engine = engine();
        assert_eq!(engine.game_result(), GameResult::None);

        // Fool's mate: white is checkmated.
        engine
            .load_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .unwrap();
        assert_eq!(engine.game_result(), GameResult::BlackWin);

        engine.load_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
        assert_eq!(engine.game_result(), GameResult::Draw);
    }

    #[test]
    fn test_bad_fen_leaves_position_untouched() {
        let mut engine = engine();
        let before = engine.to_fen();
        assert!(engine.load_fen("not a fen").is_err());
        assert!(engine.load_fen("rnbqkbnr/pppppppp/8/8 w KQkq - 0 1").is_err());
        assert_eq!(engine.to_fen(), before);
    }

    #[test]
    fn test_no_move_when_game_is_over() {
        let mut engine = engine();
        engine
            .load_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .unwrap();
        assert!(engine.search_best_move().is_none());
    }

    #[test]
    fn test_new_game_resets_position_and_table() {
        let mut engine = engine();
        assert!(engine.submit_human_move(
            Coord::from_alg("e2").unwrap(),
            Coord::from_alg("e4").unwrap()
        ));
        engine.new_game();
        assert_eq!(engine.to_fen(), Position::default().to_fen());
        assert!(engine.poll_engine_move().is_none());
    }
}
