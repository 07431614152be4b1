//! N-queens constraint placement by backtracking

pub mod grid;
pub mod solver;
pub mod trace;

pub use grid::Grid;
pub use solver::{
    PlacementOutcome, PlacementSolver, PlacementStats, SolvePolicy, all_placements,
    solve_placement,
};
pub use trace::{TraceEvent, TraceRecorder};
