//! Dictionary lookup capability
//!
//! The validator only needs a yes/no answer for a word in a locale. The backing
//! implementation is swappable: the embedded list, a file on disk, or a fake.

use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::{ResourceLoadError, load_from_file, words_from_slice};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Locale every bundled word list is written in
pub const DEFAULT_LOCALE: &str = "en";

/// Answers whether a word is a real word in a locale
pub trait Dictionary {
    fn is_real_word(&self, word: &str, locale: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_real_word(word, locale)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_real_word(word, locale)
    }
}

/// Adapts a closure into a [`Dictionary`]
///
/// # Examples
/// ```
/// use word_scramble::validator::{Dictionary, FnDictionary};
///
/// let dictionary = FnDictionary(|word: &str, _locale: &str| word == "cup");
/// assert!(dictionary.is_real_word("cup", "en"));
/// assert!(!dictionary.is_real_word("cpu", "en"));
/// ```
pub struct FnDictionary<F>(pub F);

impl<F> Dictionary for FnDictionary<F>
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        (self.0)(word, locale)
    }
}

/// Dictionary backed by an in-memory word set for a single locale
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    locale: String,
}

impl WordListDictionary {
    /// Build an English dictionary from the given words
    ///
    /// Words are lowercased and trimmed; blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
            })
            .collect();

        Self {
            words,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(DICTIONARY))
    }

    /// Load a dictionary file with one word per line
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLoadError`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceLoadError> {
        Ok(Self::from_words(load_from_file(path)?))
    }

    /// Set the locale this word list answers for
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        locale.eq_ignore_ascii_case(&self.locale) && self.words.contains(word)
    }
}
