//! Exhaustive board searches
//!
//! This crate provides:
//! - N-queens constraint placement by row-by-row backtracking
//! - Depth-blind minimax for tic-tac-toe, with board validation and game
//!   sessions
//! - Observer hooks for following the placement search step by step
//! - JSON export and a command-line front end

pub mod cli;
pub mod error;
pub mod export;
pub mod ports;
pub mod queens;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use queens::{Grid, PlacementOutcome, PlacementSolver, SolvePolicy, solve_placement};
pub use search::{Minimax, choose_game_move};
pub use tictactoe::{Board, Cell, Player, Position};
