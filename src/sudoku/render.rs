//! Formats a grid as a bordered text block.
//!
//! The renderer is a read-only collaborator of the core: it consumes the
//! grid through [`Display`] and defines the one human-facing output format
//! of the system. Empty cells render as blanks, cells are separated by `|`
//! inside a 3x3 band and by `║` between bands, and the horizontal rules are
//! thin inside a band and thick between bands.

use crate::sudoku::grid::{BOX_SIZE, EMPTY, Grid};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

const TOP: &str = "╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗";
const THIN: &str = "╟───┼───┼───╫───┼───┼───╫───┼───┼───╢";
const THICK: &str = "╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣";
const BOTTOM: &str = "╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝";

/// The glyph for one cell: the digit, or a blank for the empty sentinel.
const fn glyph(value: u8) -> char {
    if value == EMPTY {
        ' '
    } else {
        (b'0' + value) as char
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TOP}")?;

        for (index, row) in self.rows().enumerate() {
            let line = row
                .chunks(BOX_SIZE)
                .map(|band| band.iter().map(|&v| glyph(v)).join(" | "))
                .join(" ║ ");
            writeln!(f, "║ {line} ║")?;

            if index == 8 {
                write!(f, "{BOTTOM}")?;
            } else if index % BOX_SIZE == BOX_SIZE - 1 {
                writeln!(f, "{THICK}")?;
            } else {
                writeln!(f, "{THIN}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::sudoku::grid::{EMPTY, EXAMPLE, Grid, SIZE};

    const EXAMPLE_RENDERED: &str = "\
╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
║   |   | 2 ║   |   | 8 ║   |   |   ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║   |   |   ║   |   | 3 ║ 7 | 6 | 2 ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║ 4 | 3 |   ║   |   |   ║ 8 |   |   ║
╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
║   | 5 |   ║   | 3 |   ║   | 9 |   ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║   | 4 |   ║   |   |   ║   | 2 | 6 ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║   |   |   ║ 4 | 6 | 7 ║   |   |   ║
╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
║   | 8 | 6 ║ 7 |   | 4 ║   |   |   ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║   |   |   ║ 5 | 1 | 9 ║   |   | 8 ║
╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
║ 1 | 7 |   ║   |   | 6 ║   |   | 5 ║
╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝";

    #[test]
    fn test_render_example() {
        assert_eq!(Grid::new(EXAMPLE).to_string(), EXAMPLE_RENDERED);
    }

    #[test]
    fn test_render_shape() {
        let rendered = Grid::new([[EMPTY; SIZE]; SIZE]).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 19);
        assert!(lines[1..].iter().step_by(2).all(|row| !row
            .chars()
            .any(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_render_digits_in_place() {
        let mut cells = [[EMPTY; SIZE]; SIZE];
        cells[0][0] = 9;
        let rendered = Grid::new(cells).to_string();

        assert!(rendered.lines().nth(1).unwrap().starts_with("║ 9 |"));
    }
}
