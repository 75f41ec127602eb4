//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types. Everything here is pure and
//! has no knowledge of dictionaries, randomness or presentation.

mod letters;
mod rejection;
mod used;
mod word;

pub use letters::{LetterCounts, is_derivable};
pub use rejection::Rejection;
pub use used::UsedWords;
pub use word::Candidate;
