//! Recording observer for the placement search

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::ports::PlacementObserver;

/// One step of the placement search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Place { row: usize, col: usize },
    Remove { row: usize, col: usize },
    Solution { index: usize },
}

/// Collects every search step in order.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
    solutions: usize,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of queens on the grid after replaying every event
    pub fn queens_on_board(&self) -> usize {
        self.events.iter().fold(0usize, |count, event| match event {
            TraceEvent::Place { .. } => count + 1,
            TraceEvent::Remove { .. } => count.saturating_sub(1),
            TraceEvent::Solution { .. } => count,
        })
    }
}

impl PlacementObserver for TraceRecorder {
    fn on_place(&mut self, row: usize, col: usize) {
        self.events.push(TraceEvent::Place { row, col });
    }

    fn on_remove(&mut self, row: usize, col: usize) {
        self.events.push(TraceEvent::Remove { row, col });
    }

    fn on_solution(&mut self, _grid: &Grid) {
        self.events.push(TraceEvent::Solution {
            index: self.solutions,
        });
        self.solutions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::{PlacementSolver, SolvePolicy};

    #[test]
    fn test_trace_for_four_queens() {
        let mut recorder = TraceRecorder::new();
        let outcome = PlacementSolver::new(4)
            .unwrap()
            .with_observer(&mut recorder)
            .solve();
        assert!(outcome.solved);

        let events = recorder.events();
        assert_eq!(events[0], TraceEvent::Place { row: 0, col: 0 });
        assert_eq!(events[1], TraceEvent::Place { row: 1, col: 2 });
        // (0, 0) is a dead end; it is taken back before column 1 is tried
        let first_remove_of_origin = events
            .iter()
            .position(|e| *e == TraceEvent::Remove { row: 0, col: 0 })
            .unwrap();
        assert_eq!(
            events[first_remove_of_origin + 1],
            TraceEvent::Place { row: 0, col: 1 }
        );
        assert_eq!(events.last(), Some(&TraceEvent::Solution { index: 0 }));
        // the solved board stays on screen
        assert_eq!(recorder.queens_on_board(), 4);
    }

    #[test]
    fn test_trace_all_solutions_ends_empty() {
        let mut recorder = TraceRecorder::new();
        PlacementSolver::new(4)
            .unwrap()
            .with_policy(SolvePolicy::AllSolutions)
            .with_observer(&mut recorder)
            .solve();

        let solutions = recorder
            .events()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Solution { .. }))
            .count();
        assert_eq!(solutions, 2);
        assert_eq!(recorder.queens_on_board(), 0);
    }
}
