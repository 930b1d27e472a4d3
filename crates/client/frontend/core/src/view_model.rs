//! View-model snapshots derived from [`game_core::GameState`].
use game_core::{GallowsStage, GameConfig, GameState, GameStatus, Letter};

use crate::message::MessageLevel;

/// Display-ready snapshot of the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameViewModel {
    pub round: u64,
    /// Guess pattern with a space between cells, e.g. `_ A _`.
    pub pattern: String,
    /// Used letters in guess order, e.g. `A, E, Z`.
    pub used_letters: String,
    pub stage: GallowsStage,
    pub failures: u8,
    pub remaining: u8,
    pub max_failures: u8,
    pub status: GameStatus,
    /// The mystery word, only once the round is over.
    pub revealed_word: Option<String>,
}

impl GameViewModel {
    pub fn from_state(state: &GameState, round: u64) -> Self {
        let status = state.status();
        Self {
            round,
            pattern: spaced(state.pattern().cells()),
            used_letters: state.used_letters().to_string(),
            stage: state.gallows_stage(),
            failures: state.failures(),
            remaining: state.remaining_failures(),
            max_failures: GameConfig::MAX_FAILURES,
            status,
            revealed_word: status
                .is_finished()
                .then(|| state.mystery_word().to_string()),
        }
    }
}

fn spaced(cells: &[char]) -> String {
    let mut out = String::with_capacity(cells.len() * 2);
    for (i, c) in cells.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Validation state of the letter input field.
///
/// Submission is only enabled for [`InputFeedback::Valid`]; invalid input is
/// shown as an error instead of being sent to the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFeedback {
    Empty,
    Valid(Letter),
    Invalid { char_count: usize },
}

impl InputFeedback {
    pub const CHAR_LIMIT: usize = 1;

    pub fn evaluate(state: &GameState, input: &str) -> Self {
        if input.is_empty() {
            return Self::Empty;
        }
        match state.check_input(input) {
            Ok(letter) => Self::Valid(letter),
            Err(_) => Self::Invalid {
                char_count: input.chars().count(),
            },
        }
    }

    pub fn submit_enabled(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Maps view-model values to a frontend's concrete styling type.
///
/// Keeps color and emphasis rules out of the widgets so every screen of a
/// frontend agrees on them.
pub trait PresentationMapper {
    type Style;

    /// Style of the gallows drawing, escalating as the round gets closer to loss.
    fn style_gallows(&self, stage: GallowsStage) -> Self::Style;

    fn style_status(&self, status: GameStatus) -> Self::Style;

    /// Style of the letter input field for the given validation state.
    fn style_input(&self, feedback: &InputFeedback) -> Self::Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_pattern_and_hides_word_mid_round() {
        let mut state = GameState::new("CAT").unwrap();
        state.try_guess("A").unwrap();
        state.try_guess("Z").unwrap();

        let view = GameViewModel::from_state(&state, 1);
        assert_eq!(view.pattern, "_ A _");
        assert_eq!(view.used_letters, "A, Z");
        assert_eq!(view.failures, 1);
        assert_eq!(view.remaining, 8);
        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.revealed_word, None);
    }

    #[test]
    fn reveals_word_when_finished() {
        let mut state = GameState::new("OK").unwrap();
        state.try_guess("O").unwrap();
        state.try_guess("K").unwrap();

        let view = GameViewModel::from_state(&state, 2);
        assert_eq!(view.status, GameStatus::Won);
        assert_eq!(view.revealed_word.as_deref(), Some("OK"));
    }

    #[test]
    fn feedback_tracks_field_contents() {
        let mut state = GameState::new("CAT").unwrap();
        assert_eq!(InputFeedback::evaluate(&state, ""), InputFeedback::Empty);

        let valid = InputFeedback::evaluate(&state, "C");
        assert!(valid.submit_enabled());
        assert!(!valid.is_error());

        let too_long = InputFeedback::evaluate(&state, "CA");
        assert!(too_long.is_error());
        assert!(matches!(
            too_long,
            InputFeedback::Invalid { char_count: 2 }
        ));

        state.try_guess("C").unwrap();
        let used = InputFeedback::evaluate(&state, "C");
        assert!(!used.submit_enabled());
        assert!(used.is_error());
    }
}
