//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Deal a new round from the start screen.
    StartRound,
    /// Append a character to the letter field.
    Type(char),
    /// Remove the last character from the letter field.
    Erase,
    /// Check the letter in the field.
    Submit,
    /// Leave the current round for the start screen.
    Back,
    /// Dismiss the result screen.
    Continue,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Mode is provided externally (from AppState) for cleaner separation.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Start => Self::handle_start(key),
            AppMode::Playing => Self::handle_playing(key),
            AppMode::Finished { .. } => Self::handle_finished(key),
        }
    }

    fn handle_start(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::StartRound,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Every printable key is text here, so quitting goes through Esc first.
    fn handle_playing(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::Erase,
            KeyCode::Esc => KeyAction::Back,
            KeyCode::Char(c) => KeyAction::Type(c),
            _ => KeyAction::None,
        }
    }

    fn handle_finished(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameStatus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_text_while_playing() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &AppMode::Playing),
            KeyAction::Type('q')
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &AppMode::Playing),
            KeyAction::Submit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &AppMode::Playing),
            KeyAction::Back
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_c, &AppMode::Playing), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl_c, &AppMode::Start), KeyAction::Quit);
    }

    #[test]
    fn start_and_result_screens() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &AppMode::Start),
            KeyAction::StartRound
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &AppMode::Start),
            KeyAction::Quit
        );

        let finished = AppMode::Finished {
            status: GameStatus::Lost,
            word: "CAT".to_string(),
            since: tokio::time::Instant::now(),
        };
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), &finished),
            KeyAction::Continue
        );
    }
}
