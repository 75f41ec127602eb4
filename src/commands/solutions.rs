//! Solutions command
//!
//! Lists every dictionary word a fresh round would accept for a root word.

use crate::core::{Candidate, UsedWords};
use crate::round::max_round_score;
use crate::validator::{WordListDictionary, WordValidator};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Every acceptable word for a root
pub struct SolutionsResult {
    pub root: String,
    /// Sorted by length, then alphabetically
    pub words: Vec<String>,
    /// Best round total if every word is found, shortest first
    pub max_score: u32,
}

impl SolutionsResult {
    /// Words grouped by letter count
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.words {
            groups.entry(word.chars().count()).or_default().push(word);
        }
        groups
    }
}

/// Find all words in `dictionary` that are valid for `root` with nothing used yet
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::validator::WordListDictionary;
///
/// let dictionary = WordListDictionary::from_words(["cup", "cape", "eel", "teacup"]);
/// let result = find_solutions("teacup", &dictionary);
/// assert_eq!(result.words, ["cup", "cape"]);
/// assert_eq!(result.max_score, 11);
/// ```
#[must_use]
pub fn find_solutions(root: &str, dictionary: &WordListDictionary) -> SolutionsResult {
    let root = Candidate::new(root).into_text();
    let validator = WordValidator::new(dictionary).with_locale(dictionary.locale());
    let used = UsedWords::new();

    let pool: Vec<&str> = dictionary.words().collect();
    let mut words: Vec<String> = pool
        .par_iter()
        .filter(|&&word| validator.validate(word, &root, &used).is_accepted())
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = max_round_score(words.as_slice());
    log::debug!("{} solutions for '{root}'", words.len());

    SolutionsResult {
        root,
        words,
        max_score,
    }
}
