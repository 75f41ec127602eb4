//! Word validation
//!
//! Decides whether a submitted word is acceptable for a root word.

mod dictionary;
mod engine;

pub use dictionary::{DEFAULT_LOCALE, Dictionary, FnDictionary, WordListDictionary};
pub use engine::{MIN_WORD_LENGTH, Verdict, WordValidator};
