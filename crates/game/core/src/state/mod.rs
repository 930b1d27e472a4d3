//! Authoritative round state.
//!
//! [`GameState`] owns the mystery word, the revealed pattern, the used-letter
//! log and the failure counter. Frontends read it through accessors and
//! mutate it exclusively through [`GameState::guess`].
mod error;
mod letter;
mod status;
mod word;

pub use error::{GuessError, LetterError, WordError};
pub use letter::{Letter, LetterSet, UsedLetters};
pub use status::{GallowsStage, GameStatus};
pub use word::{GuessPattern, MysteryWord};

use crate::config::GameConfig;

/// Result of an accepted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// The letter is in the word; `revealed` positions were uncovered.
    Hit { letter: Letter, revealed: usize },
    /// The letter is not in the word; the gallows advanced to `stage`.
    Miss { letter: Letter, stage: GallowsStage },
}

impl GuessOutcome {
    pub const fn letter(&self) -> Letter {
        match self {
            Self::Hit { letter, .. } | Self::Miss { letter, .. } => *letter,
        }
    }

    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Canonical snapshot of one Hangman round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    word: MysteryWord,
    pattern: GuessPattern,
    used: UsedLetters,
    /// Incorrect guesses so far, never above [`GameConfig::MAX_FAILURES`].
    failures: u8,
}

impl GameState {
    /// Starts a round for `word` with the default configuration.
    pub fn new(word: &str) -> Result<Self, WordError> {
        Self::with_config(word, &GameConfig::default())
    }

    pub fn with_config(word: &str, config: &GameConfig) -> Result<Self, WordError> {
        let word = MysteryWord::with_config(word, config)?;
        Ok(Self::from_word(word, config))
    }

    pub fn from_word(word: MysteryWord, config: &GameConfig) -> Self {
        let pattern = GuessPattern::masked(&word, config.placeholder);
        Self {
            word,
            pattern,
            used: UsedLetters::new(),
            failures: 0,
        }
    }

    /// Whether `input` may be submitted as the next guess.
    ///
    /// Accepts exactly one alphabetic character that has not been used yet,
    /// and only while the round is in progress.
    pub fn validate(&self, input: &str) -> bool {
        self.check_input(input).is_ok()
    }

    /// Like [`validate`](Self::validate) but says why the input is rejected.
    pub fn check_input(&self, input: &str) -> Result<Letter, GuessError> {
        let letter = Letter::parse(input)?;
        self.check_letter(letter)?;
        Ok(letter)
    }

    fn check_letter(&self, letter: Letter) -> Result<(), GuessError> {
        let status = self.status();
        if status.is_finished() {
            return Err(GuessError::RoundOver(status));
        }
        if self.used.contains(letter) {
            return Err(GuessError::AlreadyUsed(letter));
        }
        Ok(())
    }

    /// Applies a guess.
    ///
    /// The letter is appended to the used letters. A hit reveals every
    /// matching position; a miss advances the gallows by one stage. Repeated
    /// letters and guesses after the round ended are rejected without
    /// touching the state.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        self.check_letter(letter)?;
        self.used.insert(letter);

        if self.word.contains(letter) {
            let revealed = self.pattern.reveal(&self.word, letter);
            return Ok(GuessOutcome::Hit { letter, revealed });
        }

        self.failures = (self.failures + 1).min(GameConfig::MAX_FAILURES);
        Ok(GuessOutcome::Miss {
            letter,
            stage: self.gallows_stage(),
        })
    }

    /// Parses raw input and applies it as a guess.
    pub fn try_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let letter = Letter::parse(input)?;
        self.guess(letter)
    }

    pub fn status(&self) -> GameStatus {
        if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.failures >= GameConfig::MAX_FAILURES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn mystery_word(&self) -> &MysteryWord {
        &self.word
    }

    pub fn pattern(&self) -> &GuessPattern {
        &self.pattern
    }

    pub fn used_letters(&self) -> &UsedLetters {
        &self.used
    }

    pub fn failures(&self) -> u8 {
        self.failures
    }

    pub fn remaining_failures(&self) -> u8 {
        GameConfig::MAX_FAILURES - self.failures
    }

    pub fn gallows_stage(&self) -> GallowsStage {
        GallowsStage::from_failures(self.failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn new_round_is_fully_masked() {
        let state = GameState::new("cat").unwrap();
        assert_eq!(state.mystery_word().as_str(), "CAT");
        assert_eq!(state.pattern().to_string(), "___");
        assert!(state.used_letters().is_empty());
        assert_eq!(state.failures(), 0);
        assert_eq!(state.gallows_stage(), GallowsStage::EMPTY);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn validate_rejects_used_letters_in_either_case() {
        let mut state = GameState::new("CAT").unwrap();
        assert!(state.validate("a"));
        state.guess(letter('A')).unwrap();
        assert!(!state.validate("A"));
        assert!(!state.validate("a"));
        assert!(!state.validate(""));
        assert!(!state.validate("AB"));
        assert!(!state.validate("?"));
    }

    #[test]
    fn repeated_guess_is_rejected_without_side_effects() {
        let mut state = GameState::new("CAT").unwrap();
        state.guess(letter('Z')).unwrap();
        let before = state.clone();

        let err = state.guess(letter('Z')).unwrap_err();
        assert_eq!(err, GuessError::AlreadyUsed(letter('Z')));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(state, before);
    }

    #[test]
    fn guess_after_round_over_is_internal_error() {
        let mut state = GameState::new("A").unwrap();
        state.guess(letter('A')).unwrap();
        assert_eq!(state.status(), GameStatus::Won);

        let err = state.guess(letter('B')).unwrap_err();
        assert_eq!(err, GuessError::RoundOver(GameStatus::Won));
        assert!(err.severity().is_internal());
        assert!(!state.validate("B"));
    }

    #[test]
    fn try_guess_reports_parse_errors() {
        let mut state = GameState::new("CAT").unwrap();
        let err = state.try_guess("12").unwrap_err();
        assert_eq!(
            err,
            GuessError::InvalidLetter(LetterError::TooLong { len: 2 })
        );
        assert_eq!(err.error_code(), "LETTER_TOO_LONG");
        assert!(state.used_letters().is_empty());
    }

    #[test]
    fn outcomes_describe_hit_and_miss() {
        let mut state = GameState::new("BANANA").unwrap();
        assert_eq!(
            state.guess(letter('N')).unwrap(),
            GuessOutcome::Hit {
                letter: letter('N'),
                revealed: 2
            }
        );
        assert_eq!(
            state.guess(letter('E')).unwrap(),
            GuessOutcome::Miss {
                letter: letter('E'),
                stage: GallowsStage::from_failures(1)
            }
        );
    }

    #[test]
    fn letter_placeholder_cannot_hide_a_hit() {
        let config = GameConfig::new().with_placeholder('A');
        let mut state = GameState::with_config("CAT", &config).unwrap();
        assert_eq!(state.pattern().to_string(), "___");

        assert!(state.guess(letter('A')).unwrap().is_hit());
        assert_eq!(state.failures(), 0);

        state.guess(letter('C')).unwrap();
        state.guess(letter('T')).unwrap();
        assert_eq!(state.pattern().to_string(), "CAT");
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn custom_placeholder_is_used() {
        let config = GameConfig::new().with_placeholder('*');
        let mut state = GameState::with_config("dog", &config).unwrap();
        state.guess(letter('o')).unwrap();
        assert_eq!(state.pattern().to_string(), "*O*");
    }
}
