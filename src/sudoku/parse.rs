#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for plain-text Sudoku puzzle descriptions.
//!
//! The format is line-oriented and deliberately loose:
//! - Lines whose first non-blank character is `#` are comments and skipped.
//! - `1`-`9` are given digits; `0` and `.` mark an empty cell.
//! - Whitespace is ignored everywhere, so the 81-character single-line form
//!   and the nine-rows form parse identically.
//! - Any other character is an error, as is any cell count other than 81.
//!
//! Malformed input is a distinct, early failure ([`ParseGridError`]) and is
//! never conflated with an unsolvable puzzle: parsing happens before any
//! search begins.

use crate::sudoku::grid::{CELL_COUNT, EMPTY, Grid, SIZE};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead};
use std::path::Path;

/// Errors produced while reading a puzzle description.
#[derive(Debug)]
pub enum ParseGridError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A character that is neither a digit, a blank marker, whitespace nor
    /// part of a comment line.
    InvalidCharacter(char),
    /// The input did not describe exactly 81 cells.
    WrongCellCount(usize),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read puzzle: {e}"),
            Self::InvalidCharacter(c) => write!(f, "invalid character {c:?} in puzzle"),
            Self::WrongCellCount(n) => {
                write!(f, "expected {CELL_COUNT} cells, found {n}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseGridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parses a puzzle grid from a `BufRead` source.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the reader fails, if a non-puzzle character
/// is encountered, or if the input does not hold exactly 81 cells.
pub fn parse_grid<R: BufRead>(reader: R) -> Result<Grid, ParseGridError> {
    let mut values = Vec::with_capacity(CELL_COUNT);

    for line in reader.lines() {
        let line = line?;

        if line.trim_start().starts_with('#') {
            continue;
        }

        for c in line.chars() {
            match c {
                '0' | '.' => values.push(EMPTY),
                '1'..='9' => values.push(c as u8 - b'0'),
                c if c.is_whitespace() => {}
                c => return Err(ParseGridError::InvalidCharacter(c)),
            }
        }
    }

    if values.len() != CELL_COUNT {
        return Err(ParseGridError::WrongCellCount(values.len()));
    }

    let mut cells = [[EMPTY; SIZE]; SIZE];
    for (row, chunk) in values.chunks(SIZE).enumerate() {
        for (col, &value) in chunk.iter().enumerate() {
            cells[row][col] = value;
        }
    }

    Ok(Grid::new(cells))
}

/// Parses a puzzle grid from a string, e.g. inline CLI input.
///
/// # Errors
///
/// See [`parse_grid`].
pub fn parse_str(input: &str) -> Result<Grid, ParseGridError> {
    parse_grid(input.as_bytes())
}

/// Parses a puzzle grid from the file at `path`.
///
/// This is a convenience wrapper that opens the file, wraps it in a
/// `BufReader`, and calls [`parse_grid`].
///
/// # Errors
///
/// Returns [`ParseGridError::Io`] if the file cannot be opened or read; see
/// [`parse_grid`] for the content errors.
pub fn parse_file(path: &Path) -> Result<Grid, ParseGridError> {
    let file = std::fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    parse_grid(reader)
}

/// Renders a grid back into the 81-character single-line form, `0` for
/// empty cells. The inverse of [`parse_str`] on that form.
#[must_use]
pub fn to_line(grid: &Grid) -> String {
    grid.rows().flatten().map(ToString::to_string).join("")
}
