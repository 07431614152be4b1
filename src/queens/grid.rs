//! N×N occupancy grid for the queen placement search

use std::fmt;

use serde::{Deserialize, Serialize};

/// Square grid of cells, each either holding a queen or empty.
///
/// Cells are stored row-major. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardSize`] for a size of zero.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }
        Ok(Grid {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Build a grid with one queen per row at the given columns.
    pub fn from_columns(columns: &[usize]) -> Result<Self, crate::Error> {
        let mut grid = Grid::new(columns.len())?;
        for (row, &col) in columns.iter().enumerate() {
            if col >= grid.size {
                return Err(crate::Error::InvalidPosition { position: col });
            }
            grid.place(row, col);
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }

    fn set(&mut self, row: usize, col: usize, occupied: bool) {
        self.cells[row * self.size + col] = occupied;
    }

    /// Put a queen on `(row, col)`.
    pub fn place(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    /// Clear `(row, col)`.
    pub fn remove(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }

    /// Whether a queen at `(row, col)` is unattacked by the queens in rows
    /// above it: same column, up-left diagonal and up-right diagonal.
    ///
    /// Rows below `row` are not inspected; the search fills rows top-down.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        if (0..row).any(|r| self.is_occupied(r, col)) {
            return false;
        }

        let mut up_left = (0..row).rev().zip((0..col).rev());
        if up_left.any(|(r, c)| self.is_occupied(r, c)) {
            return false;
        }

        let mut up_right = (0..row).rev().zip(col + 1..self.size);
        !up_right.any(|(r, c)| self.is_occupied(r, c))
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Column of the queen in each row, `None` for rows without one.
    pub fn queen_columns(&self) -> Vec<Option<usize>> {
        self.rows()
            .map(|row| row.iter().position(|&occupied| occupied))
            .collect()
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Coordinates of every queen, row-major
    pub fn queens(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of queen pairs sharing a row, column or diagonal.
    pub fn conflicts(&self) -> usize {
        let queens = self.queens();
        let mut count = 0;
        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                if r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                    count += 1;
                }
            }
        }
        count
    }

    /// A full, conflict-free assignment: one queen per row and column.
    pub fn is_solution(&self) -> bool {
        self.queen_count() == self.size
            && self.queen_columns().iter().all(Option::is_some)
            && self.conflicts() == 0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row
                .iter()
                .map(|&occupied| if occupied { "Q" } else { "." })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
