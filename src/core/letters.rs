//! Letter multisets
//!
//! A word is derivable from a root when, for every letter, the word uses it no
//! more often than the root contains it.

use rustc_hash::FxHashMap;

/// Count of each letter in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Build the multiset of letters in `text`
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Whether every letter occurrence in `other` can be matched to a distinct
    /// occurrence in `self`
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.count(letter) >= needed)
    }
}

/// Check whether `word` can be spelled using the letters of `root`
///
/// Each letter of the root may be used at most once per occurrence.
///
/// # Examples
/// ```
/// use word_scramble::core::is_derivable;
///
/// assert!(is_derivable("eat", "teacup"));
/// assert!(!is_derivable("eel", "teacup")); // needs two e's
/// ```
#[must_use]
pub fn is_derivable(word: &str, root: &str) -> bool {
    LetterCounts::of(root).contains(&LetterCounts::of(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates() {
        let counts = LetterCounts::of("speed");
        assert_eq!(counts.count('s'), 1);
        assert_eq!(counts.count('e'), 2);
        assert_eq!(counts.count('z'), 0);
        assert_eq!(counts.count('d'), 1);
    }

    #[test]
    fn empty_word_has_no_letters() {
        let counts = LetterCounts::of("");
        assert_eq!(counts, LetterCounts::default());
        assert!(LetterCounts::of("abc").contains(&counts));
    }

    #[test]
    fn derivable_uses_each_letter_once() {
        assert!(is_derivable("cup", "teacup"));
        assert!(is_derivable("cape", "teacup"));
        assert!(is_derivable("teacup", "teacup"));
        assert!(!is_derivable("eel", "teacup"));
        assert!(!is_derivable("cuppa", "teacup"));
    }

    #[test]
    fn derivable_respects_root_duplicates() {
        assert!(is_derivable("eel", "steeple"));
        assert!(is_derivable("sleep", "steeple"));
        assert!(!is_derivable("sleeper", "steeple"));
    }

    #[test]
    fn letters_absent_from_root_are_not_derivable() {
        assert!(!is_derivable("zap", "teacup"));
        assert!(!is_derivable("tea cup", "teacup"));
    }

    #[test]
    fn order_does_not_matter() {
        assert!(is_derivable("puce", "teacup"));
        assert!(is_derivable("pact", "teacup"));
    }
}
