//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry is trimmed and lowercased; blank lines are dropped so a trailing
//! newline can never put an empty root word into the pool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read a word list resource
#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns [`ResourceLoadError::Io`] if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/roots.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ResourceLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ResourceLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split text into normalised, non-blank entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content.lines().filter_map(normalise_entry).collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalise_entry(s)).collect()
}

fn normalise_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
