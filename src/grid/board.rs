use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

use super::cell::{Alphabet, CellState, VARIATION_SELECTOR};

/// Letters per guess.
pub const BOARD_WIDTH: usize = 5;
/// Guesses allowed before the puzzle is lost.
pub const MAX_ROUNDS: usize = 6;

/// Feedback for one guess, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row {
    cells: [CellState; BOARD_WIDTH],
}

impl Row {
    pub fn new(cells: [CellState; BOARD_WIDTH]) -> Self {
        Row { cells }
    }

    /// Decode one line of glyphs. `line` is the 1-based grid line used in
    /// error positions.
    pub fn decode(text: &str, line: usize, alphabet: &Alphabet) -> Result<Row, ParseError> {
        let mut cells = Vec::with_capacity(BOARD_WIDTH);
        for glyph in text.chars() {
            if glyph == VARIATION_SELECTOR || glyph == ' ' || glyph == '\t' {
                continue;
            }
            let state = alphabet.decode(glyph).ok_or(ParseError::UnknownGlyph {
                line,
                column: cells.len() + 1,
                glyph,
            })?;
            cells.push(state);
        }

        let width = cells.len();
        let cells: [CellState; BOARD_WIDTH] = cells
            .try_into()
            .map_err(|_| ParseError::RowWidth { line, width })?;
        Ok(Row { cells })
    }

    pub fn cells(&self) -> &[CellState; BOARD_WIDTH] {
        &self.cells
    }

    /// Get the cell at a 0-based column
    pub fn get(&self, col: usize) -> CellState {
        self.cells[col]
    }

    /// Every letter guessed correctly
    pub fn is_win(&self) -> bool {
        self.cells.iter().all(|&cell| cell == CellState::Hit)
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Number of Hit or Present cells
    pub fn informative_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_informative()).count()
    }
}

impl FromStr for Row {
    type Err = ParseError;

    /// Decode a single line with the standard alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Row::decode(s, 1, &Alphabet::standard())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.glyph())?;
        }
        Ok(())
    }
}

/// The rows of one attempt, in the order they were played. Always holds
/// between one and [`MAX_ROUNDS`] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Result<Self, ParseError> {
        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        if rows.len() > MAX_ROUNDS {
            return Err(ParseError::TooManyRows { rows: rows.len() });
        }
        Ok(Grid { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of guesses recorded
    pub fn num_rounds(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
