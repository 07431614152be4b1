//! Properties of the N-queens backtracking search

use boardsearch::queens::{
    Grid, PlacementSolver, SolvePolicy, TraceEvent, TraceRecorder, all_placements,
    solve_placement,
};

fn columns(grid: &Grid) -> Vec<usize> {
    grid.queen_columns().into_iter().flatten().collect()
}

mod solution_validity {
    use super::*;

    #[test]
    fn test_every_solvable_size_yields_a_valid_grid() {
        for n in [1, 4, 5, 6, 7, 8, 9, 10] {
            let outcome = solve_placement(n).unwrap();
            assert!(outcome.solved, "{n}-queens should be solvable");
            let grid = outcome.solution.unwrap();

            assert_eq!(grid.size(), n);
            for (row, cells) in grid.rows().enumerate() {
                let queens = cells.iter().filter(|&&q| q).count();
                assert_eq!(queens, 1, "row {row} of {n}-queens holds {queens} queens");
            }
            for col in 0..n {
                let queens = (0..n).filter(|&row| grid.is_occupied(row, col)).count();
                assert_eq!(queens, 1, "column {col} of {n}-queens holds {queens} queens");
            }
            assert_eq!(grid.conflicts(), 0);
        }
    }

    #[test]
    fn test_eight_queens_pairwise_safe() {
        let grid = solve_placement(8).unwrap().solution.unwrap();
        let queens = grid.queens();
        assert_eq!(queens.len(), 8);

        let mut pairs = 0;
        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                pairs += 1;
                assert_ne!(c1, c2);
                assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2));

                // the lower queen passes the safety check against the upper one alone
                let mut lone = Grid::new(8).unwrap();
                lone.place(r1, c1);
                assert!(lone.is_safe(r2, c2), "({r1}, {c1}) attacks ({r2}, {c2})");
            }
        }
        assert_eq!(pairs, 28);
    }

    #[test]
    fn test_unsolvable_sizes_report_no_solution() {
        for n in [2, 3] {
            let outcome = solve_placement(n).unwrap();
            assert!(!outcome.solved);
            assert!(outcome.solution.is_none());
        }
    }

    #[test]
    fn test_zero_size_is_an_error() {
        assert!(matches!(
            solve_placement(0),
            Err(boardsearch::Error::InvalidBoardSize { size: 0 })
        ));
    }
}

mod first_solution_order {
    use super::*;

    #[test]
    fn test_first_solutions_in_column_ascending_order() {
        assert_eq!(columns(&solve_placement(4).unwrap().solution.unwrap()), vec![1, 3, 0, 2]);
        assert_eq!(columns(&solve_placement(5).unwrap().solution.unwrap()), vec![0, 2, 4, 1, 3]);
        assert_eq!(columns(&solve_placement(6).unwrap().solution.unwrap()), vec![1, 3, 5, 0, 2, 4]);
        assert_eq!(
            columns(&solve_placement(8).unwrap().solution.unwrap()),
            vec![0, 4, 7, 5, 2, 6, 1, 3]
        );
    }

    #[test]
    fn test_enumeration_is_lexicographic() {
        let all = all_placements(6).unwrap();
        let cols: Vec<Vec<usize>> = all.iter().map(columns).collect();
        let mut sorted = cols.clone();
        sorted.sort();
        assert_eq!(cols, sorted);
    }

    #[test]
    fn test_known_solution_counts() {
        assert_eq!(all_placements(1).unwrap().len(), 1);
        assert_eq!(all_placements(7).unwrap().len(), 40);
        assert_eq!(all_placements(8).unwrap().len(), 92);
    }
}

mod undo_discipline {
    use super::*;

    #[test]
    fn test_grid_is_empty_after_every_solve() {
        for n in 1..=8 {
            for policy in [SolvePolicy::FirstSolution, SolvePolicy::AllSolutions] {
                let mut solver = PlacementSolver::new(n).unwrap().with_policy(policy);
                solver.solve();
                assert_eq!(
                    solver.grid(),
                    &Grid::new(n).unwrap(),
                    "grid not restored for n={n} {policy:?}"
                );
            }
        }
    }

    #[test]
    fn test_recorded_solution_is_a_copy() {
        let mut solver = PlacementSolver::new(5).unwrap();
        let outcome = solver.solve();
        let recorded = outcome.solution.unwrap();
        assert!(recorded.is_solution());
        assert_eq!(solver.grid().queen_count(), 0);
        assert_eq!(&solver.solutions()[0], &recorded);
    }

    #[test]
    fn test_each_removal_precedes_next_candidate_in_row() {
        let mut recorder = TraceRecorder::new();
        PlacementSolver::new(6)
            .unwrap()
            .with_observer(&mut recorder)
            .solve();

        // replaying the trace never puts two queens in one row
        let mut occupied_rows = vec![false; 6];
        for event in recorder.events() {
            match *event {
                TraceEvent::Place { row, .. } => {
                    assert!(!occupied_rows[row], "row {row} placed twice without undo");
                    occupied_rows[row] = true;
                }
                TraceEvent::Remove { row, .. } => {
                    assert!(occupied_rows[row]);
                    occupied_rows[row] = false;
                }
                TraceEvent::Solution { .. } => {
                    assert!(occupied_rows.iter().all(|&o| o));
                }
            }
        }
    }
}
