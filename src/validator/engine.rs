//! Candidate word rules
//!
//! Checks run in a fixed order and stop at the first failure, so the reported
//! reason is always the earliest rule broken:
//!
//! 1. too short
//! 2. is the root word
//! 3. already used
//! 4. not derivable from the root's letters
//! 5. not a real word

use super::dictionary::{DEFAULT_LOCALE, Dictionary};
use crate::core::{Candidate, Rejection, UsedWords, is_derivable};

/// Minimum number of letters an accepted word must have
pub const MIN_WORD_LENGTH: usize = 3;

/// Outcome of validating a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Candidate),
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Stateless rule engine for candidate words
///
/// Holds only the dictionary capability and the locale to query it with.
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    locale: String,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator querying `dictionary` in English
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Query the dictionary in a different locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Validate raw input against a root word and the words used so far
    ///
    /// The input is normalised first, so `"CUP "` and `"cup"` get the same verdict.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, UsedWords};
    /// use word_scramble::validator::{Verdict, WordListDictionary, WordValidator};
    ///
    /// let validator = WordValidator::new(WordListDictionary::from_words(["eat", "eel"]));
    /// let used = UsedWords::new();
    ///
    /// assert!(validator.validate("eat", "teacup", &used).is_accepted());
    /// assert_eq!(
    ///     validator.validate("eel", "teacup", &used),
    ///     Verdict::Rejected(Rejection::NotDerivable)
    /// );
    /// ```
    pub fn validate(&self, raw: &str, root: &str, used: &UsedWords) -> Verdict {
        self.validate_candidate(Candidate::new(raw), root, used)
    }

    /// Validate an already-normalised candidate
    pub fn validate_candidate(
        &self,
        candidate: Candidate,
        root: &str,
        used: &UsedWords,
    ) -> Verdict {
        match self.first_broken_rule(&candidate, root, used) {
            Some(reason) => Verdict::Rejected(reason),
            None => Verdict::Accepted(candidate),
        }
    }

    fn first_broken_rule(
        &self,
        candidate: &Candidate,
        root: &str,
        used: &UsedWords,
    ) -> Option<Rejection> {
        let word = candidate.text();
        let root = root.to_lowercase();

        if candidate.letter_count() < MIN_WORD_LENGTH {
            return Some(Rejection::TooShort);
        }
        if word == root {
            return Some(Rejection::IsRootWord);
        }
        if used.contains(word) {
            return Some(Rejection::AlreadyUsed);
        }
        if !is_derivable(word, &root) {
            return Some(Rejection::NotDerivable);
        }
        if !self.dictionary.is_real_word(word, &self.locale) {
            return Some(Rejection::NotARealWord);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{FnDictionary, WordListDictionary};
    use std::cell::Cell;

    fn validator() -> WordValidator<WordListDictionary> {
        WordValidator::new(WordListDictionary::from_words([
            "eat", "cup", "cape", "tea", "ace", "teacup", "eel", "at",
        ]))
    }

    fn reason(verdict: &Verdict) -> Option<Rejection> {
        verdict.rejection()
    }

    #[test]
    fn accepts_derivable_real_word() {
        let verdict = validator().validate("eat", "teacup", &UsedWords::new());
        assert_eq!(verdict, Verdict::Accepted(Candidate::new("eat")));
    }

    #[test]
    fn rejects_short_words() {
        let v = validator();
        let used = UsedWords::new();
        for word in ["at", "", "   "] {
            let verdict = v.validate(word, "teacup", &used);
            assert_eq!(reason(&verdict), Some(Rejection::TooShort), "{word:?}");
        }
    }

    #[test]
    fn too_short_wins_over_root_word() {
        let v = validator();
        let verdict = v.validate("at", "at", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::TooShort));
    }

    #[test]
    fn rejects_root_word() {
        let verdict = validator().validate("teacup", "teacup", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::IsRootWord));
    }

    #[test]
    fn root_word_check_is_case_insensitive() {
        let verdict = validator().validate("TeaCup", "TEACUP", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::IsRootWord));
    }

    #[test]
    fn root_word_wins_over_already_used() {
        let used = UsedWords::from_recent_first(["teacup"]);
        let verdict = validator().validate("teacup", "teacup", &used);
        assert_eq!(reason(&verdict), Some(Rejection::IsRootWord));
    }

    #[test]
    fn rejects_used_words() {
        let used = UsedWords::from_recent_first(["cup"]);
        let verdict = validator().validate("cup", "teacup", &used);
        assert_eq!(reason(&verdict), Some(Rejection::AlreadyUsed));
    }

    #[test]
    fn already_used_wins_over_not_derivable() {
        // A used word that is not derivable cannot happen in play, but the
        // order still decides which reason is reported.
        let used = UsedWords::from_recent_first(["zzz"]);
        let verdict = validator().validate("zzz", "teacup", &used);
        assert_eq!(reason(&verdict), Some(Rejection::AlreadyUsed));
    }

    #[test]
    fn rejects_words_needing_extra_letters() {
        let verdict = validator().validate("eel", "teacup", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::NotDerivable));
    }

    #[test]
    fn not_derivable_wins_over_not_a_word() {
        let verdict = validator().validate("xyz", "teacup", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::NotDerivable));
    }

    #[test]
    fn rejects_made_up_words() {
        let verdict = validator().validate("pute", "teacup", &UsedWords::new());
        assert_eq!(reason(&verdict), Some(Rejection::NotARealWord));
    }

    #[test]
    fn uppercase_input_matches_lowercase() {
        let v = validator();
        let used = UsedWords::new();
        let upper = v.validate("CUP", "teacup", &used);
        assert_eq!(upper, v.validate("cup", "teacup", &used));
        let padded = v.validate(" Cape\n", "teacup", &used);
        assert_eq!(padded, v.validate("cape", "teacup", &used));
    }

    #[test]
    fn validation_is_deterministic() {
        let v = validator();
        let used = UsedWords::from_recent_first(["tea"]);
        for word in ["eat", "tea", "eel", "at", "pute", "teacup"] {
            let first = v.validate(word, "teacup", &used);
            for _ in 0..5 {
                assert_eq!(v.validate(word, "teacup", &used), first, "{word}");
            }
        }
    }

    #[test]
    fn dictionary_not_consulted_when_earlier_rule_fails() {
        let lookups = Cell::new(0);
        let v = WordValidator::new(FnDictionary(|_: &str, _: &str| {
            lookups.set(lookups.get() + 1);
            true
        }));
        let used = UsedWords::from_recent_first(["cup"]);

        for word in ["at", "teacup", "cup", "eel"] {
            assert!(!v.validate(word, "teacup", &used).is_accepted());
        }
        assert_eq!(lookups.get(), 0);

        assert!(v.validate("cape", "teacup", &used).is_accepted());
        assert_eq!(lookups.get(), 1);
    }

    #[test]
    fn locale_is_passed_to_dictionary() {
        let v = WordValidator::new(FnDictionary(|_: &str, locale: &str| locale == "fr"))
            .with_locale("fr");
        assert!(v.validate("cup", "teacup", &UsedWords::new()).is_accepted());

        let english = WordValidator::new(FnDictionary(|_: &str, locale: &str| locale == "fr"));
        assert_eq!(
            english.validate("cup", "teacup", &UsedWords::new()).rejection(),
            Some(Rejection::NotARealWord)
        );
    }
}
