//! Text rendering of a board.
//!
//! Two layouts: [`plain`] draws only the cells with blank spacing, and
//! [`numbered`] draws a ruled grid with column and row numbers (mod 10) for
//! picking coordinates. Both borrow the board read-only.

use conway_core::{Board, Cell};

/// Glyph for a live cell.
const LIVE: char = 'X';
/// Glyph for a dead cell.
const DEAD: char = ' ';

const fn glyph(cell: Cell) -> char {
    if cell.state() { LIVE } else { DEAD }
}

/// Render the board without coordinates.
pub fn plain(board: &Board) -> String {
    let spacer = format!("{} \n", "    ".repeat(board.dimension()));
    let mut out = spacer.clone();
    for row in board.rows() {
        for cell in row {
            out.push_str(&format!("  {} ", glyph(*cell)));
        }
        out.push_str(" \n");
        out.push_str(&spacer);
    }
    out
}

/// Render the board as a ruled grid with column and row numbers.
pub fn numbered(board: &Board) -> String {
    let dimension = board.dimension();
    let separator = format!("   {}|\n", "|---".repeat(dimension));

    let mut out = String::from("   ");
    for col in 0..dimension {
        out.push_str(&format!("  {} ", col % 10));
    }
    out.push('\n');
    out.push_str(&separator);

    for (row_number, row) in board.rows().enumerate() {
        out.push_str(&format!(" {} ", row_number % 10));
        for cell in row {
            out.push_str(&format!("| {} ", glyph(*cell)));
        }
        out.push_str("|\n");
        out.push_str(&separator);
    }
    out
}
