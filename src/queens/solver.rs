//! Row-by-row backtracking search for non-attacking queen placements

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::ports::PlacementObserver;

/// When the search stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolvePolicy {
    /// Stop at the first complete assignment (columns scanned left to right,
    /// rows top to bottom)
    #[default]
    FirstSolution,
    /// Keep backtracking after each solution until the tree is exhausted
    AllSolutions,
}

/// Counters for the most recent solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementStats {
    /// Candidate cells tested with `is_safe`
    pub candidates: u64,
    /// Queens placed
    pub placements: u64,
    /// Queens taken back while backtracking
    pub removals: u64,
}

/// Result handed back to the caller of [`solve_placement`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub solved: bool,
    /// Copy of the first solution found
    pub solution: Option<Grid>,
}

/// Backtracking solver owning the grid it searches.
pub struct PlacementSolver<'a> {
    grid: Grid,
    policy: SolvePolicy,
    solutions: Vec<Grid>,
    stats: PlacementStats,
    observer: Option<&'a mut dyn PlacementObserver>,
}

impl<'a> PlacementSolver<'a> {
    /// Solver for an empty `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] for a size of zero.
    pub fn new(size: usize) -> crate::Result<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            policy: SolvePolicy::default(),
            solutions: Vec::new(),
            stats: PlacementStats::default(),
            observer: None,
        })
    }

    /// Set the stopping policy.
    pub fn with_policy(mut self, policy: SolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Report every step to `observer`.
    pub fn with_observer(mut self, observer: &'a mut dyn PlacementObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn policy(&self) -> SolvePolicy {
        self.policy
    }

    /// The live grid. Between searches it is empty.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Solutions recorded so far, in the order found
    pub fn solutions(&self) -> &[Grid] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Grid> {
        self.solutions
    }

    pub fn stats(&self) -> PlacementStats {
        self.stats
    }

    /// Run the search from the empty grid.
    pub fn solve(&mut self) -> PlacementOutcome {
        self.solutions.clear();
        self.stats = PlacementStats::default();

        let solved = self.attempt(0);

        debug!(
            "{n}-queens ({policy:?}): {count} solution(s), {candidates} candidates, {placements} placements, {removals} removals",
            n = self.grid.size(),
            policy = self.policy,
            count = self.solutions.len(),
            candidates = self.stats.candidates,
            placements = self.stats.placements,
            removals = self.stats.removals,
        );

        PlacementOutcome {
            solved,
            solution: self.solutions.first().cloned(),
        }
    }

    /// Extend a grid whose rows `0..row` hold a valid partial assignment.
    ///
    /// Returns `true` if a complete assignment was reached below this row;
    /// each one is recorded as a copy. The grid is back to its state at
    /// entry when this returns. Only [`PlacementSolver::solve`] and the
    /// recursion itself call this, so the precondition always holds.
    fn attempt(&mut self, row: usize) -> bool {
        let n = self.grid.size();
        if row == n {
            let snapshot = self.grid.clone();
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.on_solution(&snapshot);
            }
            self.solutions.push(snapshot);
            return true;
        }

        let mut found = false;
        for col in 0..n {
            self.stats.candidates += 1;
            if !self.grid.is_safe(row, col) {
                continue;
            }

            if self.with_queen(row, col, |solver| solver.attempt(row + 1)) {
                found = true;
                if self.policy == SolvePolicy::FirstSolution {
                    return true;
                }
            }
        }

        found
    }

    /// Place a queen, run `f`, and take the queen back off.
    fn with_queen(&mut self, row: usize, col: usize, f: impl FnOnce(&mut Self) -> bool) -> bool {
        self.grid.place(row, col);
        self.stats.placements += 1;
        trace!("place ({row}, {col})");
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_place(row, col);
        }

        let found = f(self);

        self.grid.remove(row, col);
        // after a first-solution hit we are unwinding, not backtracking
        if !found || self.policy == SolvePolicy::AllSolutions {
            self.stats.removals += 1;
            trace!("remove ({row}, {col})");
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.on_remove(row, col);
            }
        }

        found
    }
}

/// Place `n` non-attacking queens on an `n`×`n` grid, stopping at the first
/// solution.
///
/// "No solution" is a normal outcome (`n` = 2 or 3), reported as
/// `solved: false`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBoardSize`] for `n == 0`.
pub fn solve_placement(n: usize) -> crate::Result<PlacementOutcome> {
    Ok(PlacementSolver::new(n)?.solve())
}

/// Every solution for `n`, in search order.
pub fn all_placements(n: usize) -> crate::Result<Vec<Grid>> {
    let mut solver = PlacementSolver::new(n)?.with_policy(SolvePolicy::AllSolutions);
    solver.solve();
    Ok(solver.into_solutions())
}
