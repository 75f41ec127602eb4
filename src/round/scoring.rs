//! Word scoring
//!
//! A word's score is its letter count multiplied by its position among the words
//! accepted this round (1 for the first word, 2 for the second, ...). Later
//! words are worth more, so the order words are found in changes the total.

use crate::core::Candidate;

/// Score for a word that became the `position`-th accepted word of the round
///
/// `position` is the number of used words *after* inserting this one.
///
/// # Examples
/// ```
/// use word_scramble::core::Candidate;
/// use word_scramble::round::word_score;
///
/// assert_eq!(word_score(1, &Candidate::new("cup")), 3);
/// assert_eq!(word_score(2, &Candidate::new("cape")), 8);
/// ```
#[must_use]
pub fn word_score(position: usize, candidate: &Candidate) -> u32 {
    clamp_points(position.saturating_mul(candidate.letter_count()))
}

/// Best total a round can reach if every word in `words` is accepted
///
/// Sorting by ascending length gives the longest word the largest multiplier,
/// which maximises the sum of `position × length`.
#[must_use]
pub fn max_round_score<S: AsRef<str>>(words: &[S]) -> u32 {
    let mut lengths: Vec<usize> = words.iter().map(|w| w.as_ref().chars().count()).collect();
    lengths.sort_unstable();

    let mut total = 0u32;
    for (index, len) in lengths.into_iter().enumerate() {
        let points = clamp_points((index + 1).saturating_mul(len));
        total = total.saturating_add(points);
    }
    total
}

fn clamp_points(points: usize) -> u32 {
    u32::try_from(points).unwrap_or(u32::MAX)
}
