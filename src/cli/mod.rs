//! CLI infrastructure for boardsearch
//!
//! Text front end for the two searches: solve N-queens, pick a tic-tac-toe
//! move, play interactively, or run self-play series.

pub mod commands;
pub mod config;
pub mod output;
