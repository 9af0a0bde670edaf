//! # sudoku-solver
//!
//! `sudoku-solver` is a command-line solver for standard 9x9 Sudoku puzzles,
//! built on exhaustive constraint-checked backtracking search. It parses a
//! puzzle (from a file, from inline text, or the built-in example), prints
//! the puzzle, searches for the first solution reachable in its fixed
//! traversal order, and prints either the solved grid or a definitive
//! unsolvable verdict.
//!
//! ## Features
//!
//! -   **Input formats**: puzzle files and inline text, in the 81-character
//!     single-line form or the nine-rows form, with `#` comments and `0`/`.`
//!     empty-cell markers.
//! -   **Verification**: option to re-check the solved grid against the
//!     Sudoku rules.
//! -   **Statistics**: parse time, solve time, placements, backtracks,
//!     search depth and memory usage.
//! -   **Batch solving**: the `dir` subcommand sweeps a directory of
//!     `.sudoku` files and prints an aggregate summary.
//! -   **Memory reporting**: uses `tikv-jemallocator` as the global
//!     allocator, with usage figures read via `tikv-jemalloc-ctl`.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file
//! sudoku-solver puzzle.sudoku
//!
//! # Solve a puzzle given inline, with debug output
//! sudoku-solver text --input "002008000000003762..." --debug
//!
//! # Solve the built-in example puzzle
//! sudoku-solver example
//!
//! # Solve every .sudoku file under a directory
//! sudoku-solver dir --path puzzles/
//! ```

mod command_line;

/// Global allocator using `tikv-jemallocator`; the driver's memory usage
/// statistics are read from it.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    command_line::cli::run();
}
