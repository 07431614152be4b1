//! Observer port for the placement search

use crate::queens::Grid;

/// Receives the steps of a queen placement search as they happen.
///
/// # Event Sequence
///
/// For every candidate cell that passes the safety check:
/// 1. `on_place(row, col)`
/// 2. the search of the rows below it, recursively
/// 3. `on_remove(row, col)` if the search backtracks out of that cell
///
/// `on_solution` is called each time the last row is filled, before the
/// solution is recorded. When the search stops at its first solution, the
/// queens of that solution are never reported as removed.
///
/// # Examples
///
/// ```
/// use boardsearch::{ports::PlacementObserver, queens::PlacementSolver};
///
/// #[derive(Default)]
/// struct Backtracks(usize);
///
/// impl PlacementObserver for Backtracks {
///     fn on_remove(&mut self, _row: usize, _col: usize) {
///         self.0 += 1;
///     }
/// }
///
/// let mut backtracks = Backtracks::default();
/// let outcome = PlacementSolver::new(4)
///     .unwrap()
///     .with_observer(&mut backtracks)
///     .solve();
/// assert!(outcome.solved);
/// assert!(backtracks.0 > 0);
/// ```
pub trait PlacementObserver {
    /// A queen was put on `(row, col)`.
    fn on_place(&mut self, _row: usize, _col: usize) {}

    /// The queen on `(row, col)` was taken back.
    fn on_remove(&mut self, _row: usize, _col: usize) {}

    /// Every row holds a queen; `grid` is the complete assignment.
    fn on_solution(&mut self, _grid: &Grid) {}
}
