//! Errors raised while building or advancing a round.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameStatus, Letter};

/// Input that cannot be used as a guess.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterError {
    #[error("no letter entered")]
    Empty,

    #[error("expected a single letter, got {len} characters")]
    TooLong { len: usize },

    #[error("{0:?} is not a letter from A to Z")]
    NotAlphabetic(char),
}

impl GameError for LetterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "LETTER_EMPTY",
            Self::TooLong { .. } => "LETTER_TOO_LONG",
            Self::NotAlphabetic(_) => "LETTER_NOT_ALPHABETIC",
        }
    }
}

/// A word that cannot be used as a mystery word.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordError {
    #[error("mystery word is empty")]
    Empty,

    #[error("mystery word {word:?} contains unsupported character {found:?}")]
    UnsupportedChar { word: String, found: char },

    #[error("mystery word {word:?} has {letters} letters, need at least {min}")]
    TooShort {
        word: String,
        letters: usize,
        min: usize,
    },
}

impl GameError for WordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "WORD_EMPTY",
            Self::UnsupportedChar { .. } => "WORD_UNSUPPORTED_CHAR",
            Self::TooShort { .. } => "WORD_TOO_SHORT",
        }
    }
}

/// Rejected call to [`GameState::guess`](crate::state::GameState::guess).
///
/// The state is left untouched whenever one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessError {
    #[error("invalid letter: {0}")]
    InvalidLetter(#[from] LetterError),

    #[error("letter {0} was already used")]
    AlreadyUsed(Letter),

    #[error("round is already over ({0})")]
    RoundOver(GameStatus),
}

impl GameError for GuessError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidLetter(_) | Self::AlreadyUsed(_) => ErrorSeverity::Validation,
            Self::RoundOver(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLetter(inner) => inner.error_code(),
            Self::AlreadyUsed(_) => "GUESS_ALREADY_USED",
            Self::RoundOver(_) => "GUESS_ROUND_OVER",
        }
    }
}
