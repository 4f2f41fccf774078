use super::*;

mod endgame;
mod middle_game;
mod starting_position;
