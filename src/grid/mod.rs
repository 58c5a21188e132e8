//! Decoded share grids: per-cell feedback states, the glyph alphabet used to
//! decode them, and the fixed-width rows and bounded grids built from them.

mod board;
mod cell;

pub use board::{Grid, Row, BOARD_WIDTH, MAX_ROUNDS};
pub use cell::{Alphabet, CellState};
