//! # Reidle
//!
//! Classifier for pasted Wordle share grids. Given the text a player copied
//! from the share button, decide whether the attempt was a win, and if not,
//! whether the rows could have come from legitimate play at all or the player
//! simply ran out of guesses.
//!
//! ## Modules
//!
//! - [`grid`] — Cell states, glyph alphabet, fixed-width rows and grids
//! - [`share`] — Header recognition and grid extraction from raw pastes
//! - [`verdict`] — Verdict types, the row-pair classifier, descriptions
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! let grid = reidle::share::extract("Wordle 250 2/6\n\n⬛🟨⬛⬛⬛\n🟩🟩🟩🟩🟩").unwrap();
//! assert_eq!(reidle::verdict::classify(&grid).describe(), "Win: Round 2");
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod share;
pub mod verdict;

pub use error::ParseError;
pub use grid::{CellState, Grid, Row};
pub use share::{extract, parse_share, Share};
pub use verdict::{classify, LossKind, Verdict};

/// Extract and classify a raw paste in one step.
pub fn analyze(raw: &str) -> Result<Verdict, ParseError> {
    let grid = extract(raw)?;
    Ok(classify(&grid))
}
