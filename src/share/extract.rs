use crate::error::ParseError;
use crate::grid::{Alphabet, Grid, Row};

use super::header::{strip_header, Header};

/// A parsed paste: the optional header and the decoded grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub header: Option<Header>,
    pub grid: Grid,
}

/// Extract the grid from a raw paste using the standard alphabet.
pub fn extract(raw: &str) -> Result<Grid, ParseError> {
    extract_with(raw, &Alphabet::standard())
}

/// Extract the grid from a raw paste. The header is stripped wherever it
/// occurs, then each remaining line is decoded as one row.
pub fn extract_with(raw: &str, alphabet: &Alphabet) -> Result<Grid, ParseError> {
    let body = strip_header(raw);
    let rows = body
        .lines()
        .enumerate()
        .map(|(i, line)| Row::decode(line, i + 1, alphabet))
        .collect::<Result<Vec<_>, _>>()?;

    let grid = Grid::new(rows)?;
    tracing::debug!(rounds = grid.num_rounds(), "decoded share grid");
    Ok(grid)
}

/// Parse both the header and the grid of a raw paste.
pub fn parse_share(raw: &str, alphabet: &Alphabet) -> Result<Share, ParseError> {
    let header = Header::find(raw);
    if let Some(header) = &header {
        tracing::debug!(
            puzzle = header.puzzle,
            attempts = %header.attempts,
            hard_mode = header.hard_mode,
            "found share header"
        );
    }
    let grid = extract_with(raw, alphabet)?;
    Ok(Share { header, grid })
}
