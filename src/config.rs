//! Game configuration
//!
//! Collected from the command line and used to build the word pool, dictionary
//! and root word selector for a session.

use crate::round::RngSelector;
use crate::validator::WordListDictionary;
use crate::wordlists::{EmbeddedPool, FilePool, ResourceLoadError, WordPoolProvider};
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Parse a CLI value: `embedded` (any case) or a file path
    ///
    /// # Examples
    /// ```
    /// use word_scramble::config::WordSource;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
    /// assert_eq!(
    ///     WordSource::from_arg("words.txt"),
    ///     WordSource::File(PathBuf::from("words.txt"))
    /// );
    /// ```
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Settings for a session
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub word_pool: WordSource,
    pub dictionary: WordSource,
    /// Fixed seed for reproducible root word selection
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Provider for the configured root word pool
    #[must_use]
    pub fn pool_provider(&self) -> Box<dyn WordPoolProvider> {
        match &self.word_pool {
            WordSource::Embedded => Box::new(EmbeddedPool),
            WordSource::File(path) => Box::new(FilePool::new(path.clone())),
        }
    }

    /// Load the configured root word pool
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLoadError`] if a pool file cannot be read.
    pub fn load_pool(&self) -> Result<Vec<String>, ResourceLoadError> {
        self.pool_provider().load_word_pool()
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLoadError`] if a dictionary file cannot be read.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, ResourceLoadError> {
        match &self.dictionary {
            WordSource::Embedded => Ok(WordListDictionary::embedded()),
            WordSource::File(path) => WordListDictionary::load(path),
        }
    }

    /// Root word selector, seeded if a seed was configured
    #[must_use]
    pub fn selector(&self) -> RngSelector<StdRng> {
        self.seed
            .map_or_else(RngSelector::from_os_rng, RngSelector::seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RandomSelector;
    use crate::wordlists::ROOT_WORDS;

    #[test]
    fn from_arg_is_case_insensitive_for_embedded() {
        assert_eq!(WordSource::from_arg("EMBEDDED"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("./embedded.txt"),
            WordSource::File(PathBuf::from("./embedded.txt"))
        );
    }

    #[test]
    fn default_config_uses_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.load_pool().unwrap().len(), ROOT_WORDS.len());
        assert!(!config.load_dictionary().unwrap().is_empty());
    }

    #[test]
    fn missing_files_surface_load_errors() {
        let config = GameConfig {
            word_pool: WordSource::File(PathBuf::from("missing/roots.txt")),
            dictionary: WordSource::File(PathBuf::from("missing/dictionary.txt")),
            seed: None,
        };
        assert!(config.load_pool().is_err());
        assert!(config.load_dictionary().is_err());
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = GameConfig {
            seed: Some(2024),
            ..GameConfig::default()
        };
        let pool = config.load_pool().unwrap();

        let mut a = config.selector();
        let mut b = config.selector();
        assert_eq!(a.pick(&pool), b.pick(&pool));
    }
}
