//! Adversarial game search

pub mod minimax;
pub mod self_play;

pub use minimax::{DRAW, LOSS, Minimax, SearchStats, WIN, best_scored, choose_game_move};
pub use self_play::{Opponent, play_against_random, play_match, self_play};
