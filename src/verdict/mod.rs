//! Classification of a decoded grid: the verdict types, the pairwise
//! consistency scan that produces them, and their one-line descriptions.

mod classify;
mod outcome;

pub use classify::classify;
pub use outcome::{LossKind, Verdict};
