//! The backtracking search engine.
//!
//! This module provides the [`Backtracking`] engine, which solves a Sudoku
//! grid by exhaustive constraint-checked depth-first search, mutating the
//! grid in place and undoing every choice that leads to a dead end.
//!
//! The core logic involves:
//! 1.  **Scan:** locate the next empty cell in row-major order. If there is
//!     none, the grid is completely filled and the search has succeeded.
//! 2.  **Try:** for each candidate digit `1..=9` in ascending order, skip
//!     the digits that would violate a row, column or box constraint.
//! 3.  **Place:** write a valid candidate into the cell and recurse on the
//!     remainder of the grid. A successful recursion propagates immediately,
//!     leaving the placement in the grid.
//! 4.  **Undo:** if the recursion fails, reset the cell to empty and move on
//!     to the next candidate. When every candidate has failed, the frame
//!     itself fails with the cell already restored, so an unsolvable puzzle
//!     leaves the grid exactly as it was given.
//!
//! No heuristic ordering is used: the next cell is always the first empty
//! one in scan order and digits are always tried in ascending order, so the
//! search is deterministic and the first-found solution of a given puzzle
//! never varies. The worst case is exponential in the number of empty
//! cells; constraint pruning makes real puzzles terminate far faster.

use crate::sudoku::grid::{Coordinate, EMPTY, Grid};
use crate::sudoku::rules;
use std::fmt::{self, Display, Formatter};

/// The outcome of a solve call. There are exactly two: either the grid was
/// completed, or every branch of the search was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// The grid now holds a complete, constraint-satisfying solution.
    Solved,
    /// No assignment of the empty cells satisfies the constraints. The grid
    /// is unchanged from its input state.
    Unsolvable,
}

impl Outcome {
    /// True iff the outcome is [`Outcome::Solved`].
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => write!(f, "SOLVED"),
            Self::Unsolvable => write!(f, "UNSOLVABLE"),
        }
    }
}

/// Counters describing one search run. Reporting-only: the counters never
/// influence the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of speculative digit placements committed to the grid.
    pub placements: usize,
    /// Number of placements undone after the recursion below them failed.
    pub backtracks: usize,
    /// Deepest nesting of in-progress cells reached by the search.
    pub max_depth: usize,
}

/// Common interface for solve engines.
pub trait Engine {
    /// Runs the search to completion and reports the outcome.
    fn solve(&mut self) -> Outcome;

    /// Returns the counters accumulated by [`Engine::solve`].
    fn stats(&self) -> SearchStats;
}

/// A backtracking engine over one borrowed grid.
///
/// The engine never owns a copy of the grid: it borrows the caller's
/// instance mutably for the duration of the call and operates on it
/// directly. On success the solution is left in place; on failure every
/// speculative placement has been undone, so the caller gets the grid back
/// exactly as supplied — never partially corrupted.
#[derive(Debug)]
pub struct Backtracking<'g> {
    grid: &'g mut Grid,
    stats: SearchStats,
}

impl<'g> Backtracking<'g> {
    /// Creates an engine borrowing `grid` for one solve call.
    pub fn new(grid: &'g mut Grid) -> Self {
        Self {
            grid,
            stats: SearchStats::default(),
        }
    }

    /// One implicit stack frame per currently-empty cell being attempted.
    ///
    /// Returns `true` as soon as the grid is completely filled. Candidates
    /// are snapshot at frame entry; since every deeper placement is undone
    /// before the next candidate is tried, the grid seen by each try equals
    /// the frame-entry grid and the snapshot changes nothing observable.
    fn search(&mut self, depth: usize) -> bool {
        let Some(cell) = self.grid.find_next_empty() else {
            return true;
        };

        self.stats.max_depth = self.stats.max_depth.max(depth + 1);

        for guess in rules::candidates(self.grid, cell) {
            self.grid.set(cell, guess);
            self.stats.placements += 1;

            if self.search(depth + 1) {
                return true;
            }

            self.grid.set(cell, EMPTY);
            self.stats.backtracks += 1;
        }

        false
    }

    /// The coordinate the next frame would work on; exposed for debugging
    /// output in the driver.
    #[must_use]
    pub fn next_cell(&self) -> Option<Coordinate> {
        self.grid.find_next_empty()
    }
}

impl Engine for Backtracking<'_> {
    fn solve(&mut self) -> Outcome {
        if self.search(0) {
            Outcome::Solved
        } else {
            Outcome::Unsolvable
        }
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Solves `grid` in place with a [`Backtracking`] engine, discarding the
/// search counters.
pub fn solve(grid: &mut Grid) -> Outcome {
    Backtracking::new(grid).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::grid::{EXAMPLE, SIZE};

    /// The unique completion of [`EXAMPLE`], as found by the fixed
    /// row-major, ascending-digit traversal.
    const EXAMPLE_SOLUTION: [[u8; SIZE]; SIZE] = [
        [9, 6, 2, 1, 7, 8, 3, 5, 4],
        [8, 1, 5, 9, 4, 3, 7, 6, 2],
        [4, 3, 7, 6, 5, 2, 8, 1, 9],
        [6, 5, 8, 2, 3, 1, 4, 9, 7],
        [7, 4, 3, 8, 9, 5, 1, 2, 6],
        [2, 9, 1, 4, 6, 7, 5, 8, 3],
        [5, 8, 6, 7, 2, 4, 9, 3, 1],
        [3, 2, 4, 5, 1, 9, 6, 7, 8],
        [1, 7, 9, 3, 8, 6, 2, 4, 5],
    ];

    #[test]
    fn test_solve_example() {
        let mut grid = Grid::new(EXAMPLE);

        assert_eq!(solve(&mut grid), Outcome::Solved);
        assert_eq!(grid, Grid::new(EXAMPLE_SOLUTION));
        assert!(rules::is_solved(&grid));
    }

    #[test]
    fn test_solved_grid_is_valid() {
        let mut grid = Grid::new([[EMPTY; SIZE]; SIZE]);

        assert_eq!(solve(&mut grid), Outcome::Solved);
        assert!(rules::is_solved(&grid));
    }

    #[test]
    fn test_empty_grid_first_found_solution() {
        // The empty grid has many solutions; which one comes back is an
        // artifact of the fixed traversal order (first empty cell in
        // row-major order, digits ascending) and must never change.
        let mut grid = Grid::new([[EMPTY; SIZE]; SIZE]);

        assert_eq!(solve(&mut grid), Outcome::Solved);
        assert_eq!(
            grid,
            Grid::new([
                [1, 2, 3, 4, 5, 6, 7, 8, 9],
                [4, 5, 6, 7, 8, 9, 1, 2, 3],
                [7, 8, 9, 1, 2, 3, 4, 5, 6],
                [2, 1, 4, 3, 6, 5, 8, 9, 7],
                [3, 6, 5, 8, 9, 7, 2, 1, 4],
                [8, 9, 7, 2, 1, 4, 3, 6, 5],
                [5, 3, 1, 6, 4, 2, 9, 7, 8],
                [6, 4, 2, 9, 7, 8, 5, 3, 1],
                [9, 7, 8, 5, 3, 1, 6, 4, 2],
            ])
        );
    }

    #[test]
    fn test_already_solved_input() {
        let mut grid = Grid::new(EXAMPLE_SOLUTION);
        let mut engine = Backtracking::new(&mut grid);

        assert_eq!(engine.solve(), Outcome::Solved);
        assert_eq!(engine.stats(), SearchStats::default());
        assert_eq!(grid, Grid::new(EXAMPLE_SOLUTION));
    }

    #[test]
    fn test_single_empty_cell() {
        let mut cells = EXAMPLE_SOLUTION;
        cells[4][4] = EMPTY;
        let mut grid = Grid::new(cells);

        assert_eq!(solve(&mut grid), Outcome::Solved);
        assert_eq!(grid.get(Coordinate::new(4, 4)), EXAMPLE_SOLUTION[4][4]);
        assert_eq!(grid, Grid::new(EXAMPLE_SOLUTION));
    }

    #[test]
    fn test_contradictory_input_unchanged() {
        // Two 2s in row 0, empty cells elsewhere: no assignment can ever
        // resolve the pre-existing duplicate, so the search must exhaust
        // and hand back the grid exactly as given.
        let mut cells = EXAMPLE;
        cells[0][0] = 2;
        let mut grid = Grid::new(cells);

        assert_eq!(solve(&mut grid), Outcome::Unsolvable);
        assert_eq!(grid, Grid::new(cells));
    }

    #[test]
    fn test_consistent_but_unsolvable_unchanged() {
        // No duplicates anywhere, but the first empty cell has no candidate.
        let mut cells = [[EMPTY; SIZE]; SIZE];
        cells[0] = [0, 2, 3, 4, 5, 6, 7, 8, 9];
        cells[1][0] = 1;
        let mut grid = Grid::new(cells);

        assert!(rules::is_consistent(&grid));
        assert_eq!(solve(&mut grid), Outcome::Unsolvable);
        assert_eq!(grid, Grid::new(cells));
    }

    #[test]
    fn test_deterministic() {
        let mut first = Grid::new(EXAMPLE);
        let mut second = Grid::new(EXAMPLE);

        assert_eq!(solve(&mut first), solve(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_counted() {
        let mut grid = Grid::new(EXAMPLE);
        let empties = grid.empty_count();
        let mut engine = Backtracking::new(&mut grid);

        assert_eq!(engine.solve(), Outcome::Solved);

        let stats = engine.stats();
        assert!(stats.placements >= empties);
        assert_eq!(stats.placements - stats.backtracks, empties);
        assert_eq!(stats.max_depth, empties);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Solved.to_string(), "SOLVED");
        assert_eq!(Outcome::Unsolvable.to_string(), "UNSOLVABLE");
        assert!(Outcome::Solved.is_solved());
        assert!(!Outcome::Unsolvable.is_solved());
    }
}
