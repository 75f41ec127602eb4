//! Word Scramble
//!
//! A word game core: the player is given an eight-letter root word and makes
//! shorter words from its letters. Each accepted word scores its length times
//! its position in the round.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::round::{RngSelector, RoundState, Submission};
//! use word_scramble::validator::{WordListDictionary, WordValidator};
//!
//! let dictionary = WordListDictionary::from_words(["cup", "cape"]);
//! let mut round = RoundState::new(WordValidator::new(dictionary), RngSelector::seeded(7));
//!
//! round.start(&["teacup".to_string()]).unwrap();
//! round.submit_word("cup").unwrap();
//!
//! match round.submit_word("cape").unwrap() {
//!     Submission::Accepted { score_delta, total_score, .. } => {
//!         assert_eq!(score_delta, 8);
//!         assert_eq!(total_score, 11);
//!     }
//!     Submission::Rejected(reason) => panic!("rejected: {reason}"),
//! }
//! ```

// Core domain types
pub mod core;

// Word validation rules
pub mod validator;

// Round lifecycle and scoring
pub mod round;

// Word lists
pub mod wordlists;

// Session configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
