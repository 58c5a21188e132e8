use std::path::PathBuf;

/// Errors raised while turning a pasted share into a [`Grid`](crate::grid::Grid).
///
/// Line and column positions are 1-based and count from the first line of the
/// grid after the header has been stripped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("paste contains no grid rows")]
    Empty,

    #[error("grid has {rows} rows (at most 6 allowed)")]
    TooManyRows { rows: usize },

    #[error("row {line} has {width} cells (expected 5)")]
    RowWidth { line: usize, width: usize },

    #[error("row {line} column {column}: unrecognised glyph {glyph:?}")]
    UnknownGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
