#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Sudoku constraint predicates.
//!
//! These functions decide whether placing a candidate digit at a coordinate
//! would violate the Sudoku rules, given the grid's current (possibly
//! partial) state. They are pure queries: nothing here mutates the grid, and
//! calling a predicate twice on an unchanged grid returns the same answer
//! both times.
//!
//! Only candidate digits `1..=9` are meaningful arguments; the empty
//! sentinel is never passed as `num`. The predicates do not check that the
//! target cell is itself empty — the search engine only validates at
//! coordinates returned by [`Grid::find_next_empty`].

use crate::sudoku::grid::{BOX_SIZE, Coordinate, EMPTY, Grid, SIZE};
use bit_vec::BitVec;
use smallvec::SmallVec;

/// True iff `num` does not already appear anywhere in `row`.
#[must_use]
pub fn valid_in_row(grid: &Grid, row: usize, num: u8) -> bool {
    (0..SIZE).all(|col| grid.get(Coordinate::new(row, col)) != num)
}

/// True iff `num` does not already appear anywhere in `col`.
#[must_use]
pub fn valid_in_col(grid: &Grid, col: usize, num: u8) -> bool {
    (0..SIZE).all(|row| grid.get(Coordinate::new(row, col)) != num)
}

/// True iff `num` does not already appear in the 3x3 box containing
/// `(row, col)`, checked by scanning all nine cells of that box.
#[must_use]
pub fn valid_in_box(grid: &Grid, row: usize, col: usize, num: u8) -> bool {
    let origin = Coordinate::new(row, col).box_origin();

    (origin.row..origin.row + BOX_SIZE).all(|r| {
        (origin.col..origin.col + BOX_SIZE).all(|c| grid.get(Coordinate::new(r, c)) != num)
    })
}

/// True iff `num` may be placed at `cell` without violating the row, column
/// or box constraint.
///
/// All three checks must hold. None of them has side effects, so the
/// evaluation order affects only performance, never the answer.
#[must_use]
pub fn is_valid(grid: &Grid, cell: Coordinate, num: u8) -> bool {
    valid_in_row(grid, cell.row, num)
        && valid_in_col(grid, cell.col, num)
        && valid_in_box(grid, cell.row, cell.col, num)
}

/// The digits that may legally be placed at `cell`, in ascending order.
///
/// The ascending order matters: the search engine tries candidates in
/// exactly this order, which pins down the first-found solution.
#[must_use]
pub fn candidates(grid: &Grid, cell: Coordinate) -> SmallVec<[u8; SIZE]> {
    (1..=9).filter(|&num| is_valid(grid, cell, num)).collect()
}

/// True iff no row, column or box contains a duplicate placed digit.
///
/// Empty cells are ignored, so a partially filled grid can be consistent.
/// This is a pre/post-condition check only; the search itself never calls
/// it and reports a contradictory puzzle as unsolvable by exhaustion.
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    for i in 0..SIZE {
        if !no_duplicates((0..SIZE).map(|col| grid.get(Coordinate::new(i, col)))) {
            return false;
        }
        if !no_duplicates((0..SIZE).map(|row| grid.get(Coordinate::new(row, i)))) {
            return false;
        }
    }

    for row in (0..SIZE).step_by(BOX_SIZE) {
        for col in (0..SIZE).step_by(BOX_SIZE) {
            let cells = (row..row + BOX_SIZE)
                .flat_map(|r| (col..col + BOX_SIZE).map(move |c| Coordinate::new(r, c)));

            if !no_duplicates(cells.map(|cell| grid.get(cell))) {
                return false;
            }
        }
    }

    true
}

/// True iff the grid is completely filled and satisfies every constraint:
/// each digit `1..=9` appears exactly once per row, column and box.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    grid.find_next_empty().is_none() && is_consistent(grid)
}

/// Checks one unit (row, column or box) for duplicate placed digits, using a
/// seen-set indexed by digit value.
fn no_duplicates(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = BitVec::from_elem(SIZE + 1, false);

    for value in values {
        if value == EMPTY {
            continue;
        }

        let digit = usize::from(value);
        if seen[digit] {
            return false;
        }
        seen.set(digit, true);
    }

    true
}
