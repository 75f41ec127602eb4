//! Reasons a candidate word can be turned down
//!
//! Rejections are expected, player-correctable outcomes rather than errors. Each
//! variant carries a distinct title/message pair for the presentation layer.

use std::fmt;

/// Why a candidate word was rejected
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    IsRootWord,
    AlreadyUsed,
    NotDerivable,
    NotARealWord,
}

impl Rejection {
    /// Every rejection, in check order
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::IsRootWord,
        Self::AlreadyUsed,
        Self::NotDerivable,
        Self::NotARealWord,
    ];

    /// Short headline for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word too short",
            Self::IsRootWord => "Root word detected",
            Self::AlreadyUsed => "Word used already",
            Self::NotDerivable => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Explanatory message for an alert
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    ///
    /// assert_eq!(
    ///     Rejection::NotDerivable.message("teacup"),
    ///     "You can't spell that word from 'teacup'!"
    /// );
    /// ```
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::TooShort => "Words shorter than three letters are not allowed.".to_string(),
            Self::IsRootWord => "You can't use the root word.".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotDerivable => format!("You can't spell that word from '{root}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
