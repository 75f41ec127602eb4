//! Word check command
//!
//! Runs the validator once for a root word and a candidate.

use crate::core::{Candidate, UsedWords};
use crate::round::word_score;
use crate::validator::{Dictionary, Verdict, WordValidator};

/// Result of checking a single word
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub verdict: Verdict,
    /// Points the word would earn if submitted next
    pub potential_score: Option<u32>,
}

/// Check `word` against `root`, given the words already used (most recent first)
pub fn check_word<D: Dictionary>(
    validator: &WordValidator<D>,
    root: &str,
    word: &str,
    used: &[String],
) -> CheckResult {
    let used = UsedWords::from_recent_first(used.iter().map(|w| Candidate::new(w).into_text()));
    let root = Candidate::new(root).into_text();
    let verdict = validator.validate(word, &root, &used);

    let potential_score = match &verdict {
        Verdict::Accepted(candidate) => Some(word_score(used.len() + 1, candidate)),
        Verdict::Rejected(_) => None,
    };

    CheckResult {
        word: Candidate::new(word).into_text(),
        root,
        verdict,
        potential_score,
    }
}
