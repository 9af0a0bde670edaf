#![deny(missing_docs)]
//! This crate provides a solver for standard 9x9 Sudoku puzzles, based on
//! exhaustive constraint-checked backtracking search.

/// The `sudoku` module implements the puzzle grid, the Sudoku rule checks, the
/// backtracking search engine, and the parsing and rendering of puzzle grids.
pub mod sudoku;
