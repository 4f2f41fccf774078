pub mod book;
pub mod engine;
pub mod game_repr;
pub mod pool;
pub mod search;
