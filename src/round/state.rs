//! Round lifecycle
//!
//! `RoundState` owns everything that changes while playing: the root word, the
//! words used this round, the per-round score history and the session total.
//! All rule checking is delegated to [`WordValidator`].

use super::history::ScoreHistory;
use super::scoring::word_score;
use super::selector::RandomSelector;
use crate::core::{Rejection, UsedWords};
use crate::validator::{Dictionary, Verdict, WordValidator};
use log::{debug, info, warn};
use thiserror::Error;

/// Failures of the round lifecycle itself (not word rejections)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("the word pool is empty; no root word can be chosen")]
    EmptyWordPool,

    #[error("no round is in progress; start one first")]
    NoActiveRound,
}

/// Result of submitting a word, as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted {
        word: String,
        score_delta: u32,
        total_score: u32,
    },
    Rejected(Rejection),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Mutable game session
///
/// # Examples
/// ```
/// use word_scramble::round::{RandomSelector, RoundState, Submission};
/// use word_scramble::validator::{WordListDictionary, WordValidator};
///
/// struct First;
/// impl RandomSelector for First {
///     fn pick(&mut self, pool: &[String]) -> Option<String> {
///         pool.first().cloned()
///     }
/// }
///
/// let validator = WordValidator::new(WordListDictionary::from_words(["cup", "cape"]));
/// let mut round = RoundState::new(validator, First);
/// round.start(&["teacup".to_string()]).unwrap();
///
/// let cup = round.submit_word("cup").unwrap();
/// assert_eq!(cup, Submission::Accepted { word: "cup".into(), score_delta: 3, total_score: 3 });
/// let cape = round.submit_word("cape").unwrap();
/// assert_eq!(cape, Submission::Accepted { word: "cape".into(), score_delta: 8, total_score: 11 });
/// ```
pub struct RoundState<D, S> {
    validator: WordValidator<D>,
    selector: S,
    root_word: Option<String>,
    used_words: UsedWords,
    history: ScoreHistory,
    total_score: u32,
}

impl<D: Dictionary, S: RandomSelector> RoundState<D, S> {
    /// Create a session with no round in progress
    pub fn new(validator: WordValidator<D>, selector: S) -> Self {
        Self {
            validator,
            selector,
            root_word: None,
            used_words: UsedWords::new(),
            history: ScoreHistory::new(),
            total_score: 0,
        }
    }

    /// Start a round with a root word picked from `pool`
    ///
    /// Clears the used words and opens a new score history entry. The total
    /// score carries over.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyWordPool`] if `pool` is empty. The session is
    /// then left with no root word until a later call succeeds.
    pub fn start(&mut self, pool: &[String]) -> Result<&str, RoundError> {
        self.used_words.clear();

        let Some(root) = self.selector.pick(pool) else {
            warn!("cannot start round: word pool is empty");
            self.root_word = None;
            return Err(RoundError::EmptyWordPool);
        };

        debug!("round started with root word '{root}'");
        self.history.begin_round(root.clone());
        Ok(self.root_word.insert(root).as_str())
    }

    /// Abandon the current round and start a fresh one
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyWordPool`] if `pool` is empty.
    pub fn restart(&mut self, pool: &[String]) -> Result<&str, RoundError> {
        info!(
            "restarting round (previous root: {}, round score: {})",
            self.root_word.as_deref().unwrap_or("-"),
            self.round_score()
        );
        self.start(pool)
    }

    /// Submit raw player input
    ///
    /// A rejection leaves the session untouched. An accepted word is placed at
    /// the front of the used words and scored by its position and length.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::NoActiveRound`] if no round has been started.
    pub fn submit_word(&mut self, raw: &str) -> Result<Submission, RoundError> {
        let root = self.root_word.as_deref().ok_or(RoundError::NoActiveRound)?;

        let candidate = match self.validator.validate(raw, root, &self.used_words) {
            Verdict::Accepted(candidate) => candidate,
            Verdict::Rejected(reason) => {
                debug!("rejected '{}': {reason}", raw.trim());
                return Ok(Submission::Rejected(reason));
            }
        };

        self.used_words.insert_front(candidate.text().to_string());
        let score = word_score(self.used_words.len(), &candidate);
        self.history.award(score);
        self.total_score = self.total_score.saturating_add(score);

        debug!(
            "accepted '{candidate}' for {score} points (total {})",
            self.total_score
        );
        Ok(Submission::Accepted {
            word: candidate.into_text(),
            score_delta: score,
            total_score: self.total_score,
        })
    }

    /// Root word of the round in progress
    #[must_use]
    pub fn root_word(&self) -> Option<&str> {
        self.root_word.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.root_word.is_some()
    }

    /// Words accepted this round, most recent first
    #[must_use]
    pub const fn used_words(&self) -> &UsedWords {
        &self.used_words
    }

    #[must_use]
    pub const fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Points earned this session across all rounds
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Points earned in the round in progress
    #[must_use]
    pub fn round_score(&self) -> u32 {
        if self.is_active() {
            self.history.current().map_or(0, |entry| entry.score)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RngSelector;
    use crate::validator::WordListDictionary;

    /// Hands out pool entries in order, wrapping around
    struct Scripted {
        next: usize,
    }

    impl RandomSelector for Scripted {
        fn pick(&mut self, pool: &[String]) -> Option<String> {
            if pool.is_empty() {
                return None;
            }
            let word = pool[self.next % pool.len()].clone();
            self.next += 1;
            Some(word)
        }
    }

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn session() -> RoundState<WordListDictionary, Scripted> {
        let dictionary = WordListDictionary::from_words([
            "cup", "cape", "eat", "tea", "ace", "pact", "bar", "bear", "lamb", "able", "amber",
        ]);
        RoundState::new(WordValidator::new(dictionary), Scripted { next: 0 })
    }

    fn started() -> RoundState<WordListDictionary, Scripted> {
        let mut round = session();
        round.start(&pool(&["teacup", "scramble"])).unwrap();
        round
    }

    #[test]
    fn new_session_has_no_round() {
        let round = session();
        assert!(!round.is_active());
        assert_eq!(round.root_word(), None);
        assert_eq!(round.total_score(), 0);
        assert!(round.history().is_empty());
    }

    #[test]
    fn start_sets_root_and_opens_history_entry() {
        let mut round = session();
        let root = round.start(&pool(&["teacup"])).unwrap().to_string();

        assert_eq!(root, "teacup");
        assert_eq!(round.root_word(), Some("teacup"));
        assert!(round.used_words().is_empty());
        let head = round.history().current().unwrap();
        assert_eq!((head.word.as_str(), head.score), ("teacup", 0));
    }

    #[test]
    fn scores_follow_position_and_length() {
        let mut round = started();

        assert_eq!(
            round.submit_word("cup").unwrap(),
            Submission::Accepted {
                word: "cup".to_string(),
                score_delta: 3,
                total_score: 3
            }
        );
        assert_eq!(
            round.submit_word("cape").unwrap(),
            Submission::Accepted {
                word: "cape".to_string(),
                score_delta: 8,
                total_score: 11
            }
        );
        assert_eq!(round.total_score(), 11);
        assert_eq!(round.round_score(), 11);
        assert_eq!(round.history().current().unwrap().score, 11);
    }

    #[test]
    fn used_words_are_most_recent_first() {
        let mut round = started();
        for word in ["cup", "cape", "eat"] {
            assert!(round.submit_word(word).unwrap().is_accepted());
        }
        assert_eq!(round.used_words().to_vec(), ["eat", "cape", "cup"]);
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let mut round = started();
        round.submit_word("cup").unwrap();

        for (word, reason) in [
            ("at", Rejection::TooShort),
            ("teacup", Rejection::IsRootWord),
            ("cup", Rejection::AlreadyUsed),
            ("eel", Rejection::NotDerivable),
            ("pute", Rejection::NotARealWord),
        ] {
            assert_eq!(
                round.submit_word(word).unwrap(),
                Submission::Rejected(reason),
                "{word}"
            );
            assert_eq!(round.used_words().to_vec(), ["cup"]);
            assert_eq!(round.total_score(), 3);
            assert_eq!(round.history().len(), 1);
            assert_eq!(round.history().current().unwrap().score, 3);
        }
    }

    #[test]
    fn uppercase_submission_matches_lowercase() {
        let mut upper = started();
        let mut lower = started();
        assert_eq!(upper.submit_word("CUP"), lower.submit_word("cup"));
        assert_eq!(upper.used_words(), lower.used_words());
    }

    #[test]
    fn score_counts_normalised_letters() {
        let mut round = started();
        let submission = round.submit_word("  Cup  ").unwrap();
        assert_eq!(
            submission,
            Submission::Accepted {
                word: "cup".to_string(),
                score_delta: 3,
                total_score: 3
            }
        );
    }

    #[test]
    fn restart_keeps_total_and_history() {
        let mut round = started();
        round.submit_word("cup").unwrap();
        round.submit_word("cape").unwrap();

        let root = round.restart(&pool(&["teacup", "scramble"])).unwrap();
        assert_eq!(root, "scramble");

        assert_eq!(round.total_score(), 11);
        assert!(round.used_words().is_empty());
        assert_eq!(round.round_score(), 0);

        let entries: Vec<_> = round
            .history()
            .iter()
            .map(|e| (e.word.as_str(), e.score))
            .collect();
        assert_eq!(entries, [("scramble", 0), ("teacup", 11)]);
    }

    #[test]
    fn scoring_restarts_positions_each_round() {
        let mut round = started();
        round.submit_word("cup").unwrap();
        round.submit_word("cape").unwrap();
        round.restart(&pool(&["teacup", "scramble"])).unwrap();

        // First word of the new round gets multiplier 1 again
        assert_eq!(
            round.submit_word("bear").unwrap(),
            Submission::Accepted {
                word: "bear".to_string(),
                score_delta: 4,
                total_score: 15
            }
        );
        assert_eq!(round.history().current().unwrap().score, 4);
    }

    #[test]
    fn words_used_last_round_are_fresh_again() {
        let mut round = session();
        let teacup_only = pool(&["teacup"]);
        round.start(&teacup_only).unwrap();
        round.submit_word("cup").unwrap();
        round.restart(&teacup_only).unwrap();

        assert!(round.submit_word("cup").unwrap().is_accepted());
    }

    #[test]
    fn start_with_empty_pool_fails() {
        let mut round = session();
        assert_eq!(round.start(&[]), Err(RoundError::EmptyWordPool));
        assert_eq!(round.root_word(), None);
        assert!(round.history().is_empty());
    }

    #[test]
    fn restart_with_empty_pool_clears_root_but_keeps_score() {
        let mut round = started();
        round.submit_word("cup").unwrap();

        assert_eq!(round.restart(&[]), Err(RoundError::EmptyWordPool));
        assert_eq!(round.root_word(), None);
        assert!(round.used_words().is_empty());
        assert_eq!(round.total_score(), 3);
        assert_eq!(round.history().len(), 1);
        assert_eq!(round.round_score(), 0);
    }

    #[test]
    fn submit_without_round_fails() {
        let mut round = session();
        assert_eq!(round.submit_word("cup"), Err(RoundError::NoActiveRound));

        let mut failed = started();
        failed.restart(&[]).unwrap_err();
        assert_eq!(failed.submit_word("cup"), Err(RoundError::NoActiveRound));
    }

    #[test]
    fn recovers_after_empty_pool() {
        let mut round = session();
        round.start(&[]).unwrap_err();
        assert_eq!(round.start(&pool(&["teacup"])).unwrap(), "teacup");
        assert!(round.submit_word("tea").unwrap().is_accepted());
    }

    #[test]
    fn seeded_selector_pins_root_word() {
        let words = pool(&["teacup", "scramble", "airplane", "birthday"]);
        let dictionary = WordListDictionary::from_words(["cup"]);

        let validator = WordValidator::new(dictionary);
        let mut a = RoundState::new(validator.clone(), RngSelector::seeded(5));
        let mut b = RoundState::new(validator, RngSelector::seeded(5));

        for _ in 0..5 {
            assert_eq!(
                a.restart(&words).unwrap().to_string(),
                b.restart(&words).unwrap().to_string()
            );
        }
    }

    #[test]
    fn total_is_sum_of_history() {
        let mut round = started();
        round.submit_word("cup").unwrap();
        round.submit_word("tea").unwrap();
        round.restart(&pool(&["teacup", "scramble"])).unwrap();
        round.submit_word("bar").unwrap();
        round.submit_word("lamb").unwrap();
        round.submit_word("amber").unwrap();

        let sum: u32 = round.history().iter().map(|e| e.score).sum();
        assert_eq!(round.total_score(), sum);
        assert_eq!(sum, (3 + 6) + (3 + 8 + 15));
    }
}
