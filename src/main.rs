// Command-line driver: load a position (the start position, or a FEN given
// as the first argument), let the engine pick a move, and print it.

use gambit::engine::{Engine, BOOK_PATH};

fn main() {
    env_logger::init();

    let mut engine = match Engine::init(BOOK_PATH) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("fatal: {err}");
            std::process::exit(1);
        }
    };

    if let Some(fen) = std::env::args().nth(1) {
        if let Err(err) = engine.load_fen(&fen) {
            eprintln!("invalid FEN: {err}");
            std::process::exit(1);
        }
    }

    match engine.search_best_move() {
        Some(mv) => println!("{mv}"),
        None => println!("no legal moves ({:?})", engine.game_result()),
    }
}
