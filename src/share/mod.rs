//! Share-text handling: recognising the `Wordle <N> <K>/<M>` header and
//! extracting the feedback grid from a raw paste.

mod extract;
mod header;

pub use extract::{extract, extract_with, parse_share, Share};
pub use header::{strip_header, Header};
