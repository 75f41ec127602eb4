//! Word lists for Word Scramble
//!
//! Provides the embedded root word pool and dictionary compiled into the binary,
//! plus loaders for custom lists on disk.

mod embedded;
pub mod loader;
mod provider;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::ResourceLoadError;
pub use provider::{EmbeddedPool, FilePool, WordPoolProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_words_count_matches_const() {
        assert_eq!(ROOT_WORDS.len(), ROOT_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn root_words_are_eight_lowercase_letters() {
        for &word in ROOT_WORDS {
            assert_eq!(word.len(), 8, "Root '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_blank_entries() {
        assert!(DICTIONARY.iter().all(|w| !w.trim().is_empty()));
    }

    #[test]
    fn root_words_are_dictionary_words() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for root in ROOT_WORDS {
            assert!(dictionary.contains(root), "Root '{root}' not in dictionary");
        }
    }
}
