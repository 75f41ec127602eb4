//! Word pool providers
//!
//! A provider supplies the pool a round's root word is drawn from. The pool is
//! loaded once, before any round starts.

use super::ROOT_WORDS;
use super::loader::{ResourceLoadError, load_from_file, words_from_slice};
use std::path::PathBuf;

/// Source of candidate root words
pub trait WordPoolProvider {
    /// Load the pool of root words
    ///
    /// # Errors
    ///
    /// Returns [`ResourceLoadError`] if the backing resource cannot be read.
    fn load_word_pool(&self) -> Result<Vec<String>, ResourceLoadError>;
}

/// Root words compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPool;

impl WordPoolProvider for EmbeddedPool {
    fn load_word_pool(&self) -> Result<Vec<String>, ResourceLoadError> {
        Ok(words_from_slice(ROOT_WORDS))
    }
}

/// Root words read from a text file, one per line
#[derive(Debug, Clone)]
pub struct FilePool {
    path: PathBuf,
}

impl FilePool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordPoolProvider for FilePool {
    fn load_word_pool(&self) -> Result<Vec<String>, ResourceLoadError> {
        load_from_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_pool_is_not_empty() {
        let pool = EmbeddedPool.load_word_pool().unwrap();
        assert_eq!(pool.len(), ROOT_WORDS.len());
        assert!(pool.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn file_pool_propagates_load_errors() {
        let provider = FilePool::new("no/such/pool.txt");
        assert!(matches!(
            provider.load_word_pool(),
            Err(ResourceLoadError::Io { .. })
        ));
    }
}
