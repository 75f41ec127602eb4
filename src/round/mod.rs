//! Round lifecycle, scoring and root word selection

mod history;
mod scoring;
mod selector;
mod state;

pub use history::{ScoreHistory, WordScoreEntry};
pub use scoring::{max_round_score, word_score};
pub use selector::{RandomSelector, RngSelector};
pub use state::{RoundError, RoundState, Submission};
