//! Candidate word representation
//!
//! A Candidate is raw player input normalised for rule checking: lowercased and
//! trimmed of leading/trailing whitespace.

use std::fmt;

/// A normalised candidate word
///
/// Construction never fails; an empty or whitespace-only input produces an empty
/// candidate, which the validator rejects as too short.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalise raw input into a candidate
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let word = Candidate::new("  CuP \n");
    /// assert_eq!(word.text(), "cup");
    /// assert_eq!(word.letter_count(), 3);
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.to_lowercase().trim().to_string(),
        }
    }

    /// Get the normalised word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (Unicode scalar values, not bytes)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the candidate, returning the owned normalised text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lowercases() {
        assert_eq!(Candidate::new("CUP").text(), "cup");
        assert_eq!(Candidate::new("CaPe").text(), "cape");
    }

    #[test]
    fn candidate_trims_whitespace() {
        assert_eq!(Candidate::new("  eat\t").text(), "eat");
        assert_eq!(Candidate::new("\ncape\r\n").text(), "cape");
    }

    #[test]
    fn candidate_keeps_inner_whitespace() {
        // Inner spaces survive normalisation and later fail derivability
        assert_eq!(Candidate::new(" ice cap ").text(), "ice cap");
    }

    #[test]
    fn candidate_empty_after_trim() {
        let word = Candidate::new("   ");
        assert!(word.is_empty());
        assert_eq!(word.letter_count(), 0);
    }

    #[test]
    fn letter_count_counts_chars_not_bytes() {
        let word = Candidate::new("café");
        assert_eq!(word.letter_count(), 4);
        assert_eq!(word.text().len(), 5);
    }

    #[test]
    fn candidate_display() {
        let word = Candidate::new("Teacup");
        assert_eq!(format!("{word}"), "teacup");
    }
}
