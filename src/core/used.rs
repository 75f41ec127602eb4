//! Words already accepted in the current round

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Ordered set of used words, most recent first
///
/// Keeps a hash set alongside the display order so membership checks stay
/// constant time as the round grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords {
    order: VecDeque<String>,
    lookup: FxHashSet<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from words listed most recent first, skipping duplicates
    pub fn from_recent_first<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut used = Self::new();
        for word in words {
            let word = word.into();
            if used.lookup.insert(word.clone()) {
                used.order.push_back(word);
            }
        }
        used
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Insert at the front; returns `false` if the word was already present
    pub fn insert_front(&mut self, word: String) -> bool {
        if !self.lookup.insert(word.clone()) {
            return false;
        }
        self.order.push_front(word);
        true
    }

    /// Words in display order (most recent first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.order.iter().map(String::as_str)
    }

    /// Collect the words in display order
    #[must_use]
    pub fn to_vec(&self) -> Vec<&str> {
        self.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.lookup.clear();
    }
}
