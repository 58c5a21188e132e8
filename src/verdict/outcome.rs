use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an attempt ended without a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    /// The rows could not have come from legitimate sequential play.
    InfeasibleGuess,
    /// The round ceiling was reached with no win and no inconsistency.
    OutOfAttempts,
}

impl LossKind {
    /// Label shown in rendered verdicts
    pub fn label(self) -> &'static str {
        match self {
            LossKind::InfeasibleGuess => "Infeasible Guess",
            LossKind::OutOfAttempts => "Ran out of Guesses",
        }
    }
}

/// Result of classifying one grid. Rounds and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Win {
        round: usize,
    },
    Loss {
        round: usize,
        column: Option<usize>,
        kind: LossKind,
        description: String,
    },
}

impl Verdict {
    pub fn round(&self) -> usize {
        match self {
            Verdict::Win { round } | Verdict::Loss { round, .. } => *round,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Verdict::Win { .. })
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            Verdict::Win { .. } => None,
            Verdict::Loss { column, .. } => *column,
        }
    }

    pub fn loss_kind(&self) -> Option<LossKind> {
        match self {
            Verdict::Win { .. } => None,
            Verdict::Loss { kind, .. } => Some(*kind),
        }
    }

    /// Render the single-line description, e.g.
    /// `Loss (Infeasible Guess): Round 2 Column 1 Dropped a Hit`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Win { round } => write!(f, "Win: Round {round}"),
            Verdict::Loss {
                round,
                column,
                kind,
                description,
            } => {
                write!(f, "Loss ({}): Round {round}", kind.label())?;
                if let Some(column) = column {
                    write!(f, " Column {column}")?;
                }
                if !description.is_empty() {
                    write!(f, " {description}")?;
                }
                Ok(())
            }
        }
    }
}
