//! Per-round score history

use std::collections::VecDeque;

/// Cumulative score of one round, keyed to its root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScoreEntry {
    pub word: String,
    pub score: u32,
}

/// Score entries for every round of the session, most recent first
///
/// Entries are never removed. Only the head entry's score changes, and only
/// while its round is being played.
#[derive(Debug, Clone, Default)]
pub struct ScoreHistory {
    entries: VecDeque<WordScoreEntry>,
}

impl ScoreHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new zero-score entry for a round played with `root`
    pub fn begin_round(&mut self, root: impl Into<String>) {
        self.entries.push_front(WordScoreEntry {
            word: root.into(),
            score: 0,
        });
    }

    /// Add points to the current round's entry
    ///
    /// Returns `false` if no round has been opened yet.
    pub fn award(&mut self, points: u32) -> bool {
        match self.entries.front_mut() {
            Some(entry) => {
                entry.score = entry.score.saturating_add(points);
                true
            }
            None => false,
        }
    }

    /// The current (most recent) round's entry
    #[must_use]
    pub fn current(&self) -> Option<&WordScoreEntry> {
        self.entries.front()
    }

    /// Entries in display order (most recent first)
    pub fn iter(&self) -> impl Iterator<Item = &WordScoreEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
