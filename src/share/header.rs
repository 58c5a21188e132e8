use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Metadata line the native share button puts above the grid, e.g.
/// `Wordle 1,234 4/6*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Puzzle number
    pub puzzle: u32,
    /// Attempt count token exactly as shared: a number, or `X` for a loss.
    pub attempts: String,
    pub max_attempts: u32,
    /// Set when the share carries the hard-mode asterisk
    pub hard_mode: bool,
}

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"Wordle ([\d,]+) (\w+)/(\d+)(\*)?").expect("header pattern compiles")
    })
}

impl Header {
    /// Find the first header anywhere in `raw`.
    pub fn find(raw: &str) -> Option<Header> {
        let caps = header_regex().captures(raw)?;
        let puzzle = caps[1].replace(',', "").parse().ok()?;
        let max_attempts = caps[3].parse().ok()?;
        Some(Header {
            puzzle,
            attempts: caps[2].to_string(),
            max_attempts,
            hard_mode: caps.get(4).is_some(),
        })
    }

    /// Attempts used, or `None` when the token is not a number (`X`).
    pub fn attempts_used(&self) -> Option<u32> {
        self.attempts.parse().ok()
    }
}

/// Remove every header occurrence and trim surrounding whitespace.
pub fn strip_header(raw: &str) -> String {
    header_regex().replace_all(raw, "").trim().to_string()
}
