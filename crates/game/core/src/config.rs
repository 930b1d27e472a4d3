/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Character shown in the guess pattern for letters not yet revealed.
    pub placeholder: char,

    /// Minimum number of guessable letters a mystery word must contain.
    pub min_word_len: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Incorrect guesses that end the round. Also the index of the final gallows image.
    pub const MAX_FAILURES: u8 = 9;
    /// Number of gallows progress images (stages 0 through `MAX_FAILURES`).
    pub const GALLOWS_STAGES: usize = Self::MAX_FAILURES as usize + 1;
    /// Size of the guessable alphabet (ASCII `A`-`Z`).
    pub const ALPHABET_LEN: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLACEHOLDER: char = '_';
    pub const DEFAULT_MIN_WORD_LEN: usize = 1;

    pub fn new() -> Self {
        Self {
            placeholder: Self::DEFAULT_PLACEHOLDER,
            min_word_len: Self::DEFAULT_MIN_WORD_LEN,
        }
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_min_word_len(mut self, min_word_len: usize) -> Self {
        self.min_word_len = min_word_len;
        self
    }

    /// True for glyphs that could be read as part of a word: letters and
    /// the separators mystery words may contain.
    pub fn is_ambiguous_placeholder(c: char) -> bool {
        c.is_alphabetic() || crate::state::MysteryWord::is_separator(c)
    }

    /// Checks that the tunables cannot be confused with word content.
    ///
    /// The placeholder must not be a guessable letter or one of the
    /// separators that mystery words may contain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Self::is_ambiguous_placeholder(self.placeholder) {
            return Err(ConfigError::AmbiguousPlaceholder(self.placeholder));
        }
        if self.min_word_len == 0 {
            return Err(ConfigError::ZeroMinWordLen);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("placeholder {0:?} could be mistaken for part of a word")]
    AmbiguousPlaceholder(char),

    #[error("min_word_len must be at least 1")]
    ZeroMinWordLen,
}

impl crate::error::GameError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AmbiguousPlaceholder(_) => "CONFIG_AMBIGUOUS_PLACEHOLDER",
            Self::ZeroMinWordLen => "CONFIG_ZERO_MIN_WORD_LEN",
        }
    }
}
