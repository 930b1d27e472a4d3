//! Application state for screen management and the letter field.

use game_core::GameStatus;
use tokio::time::Instant;

/// Screen currently shown, determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for the player to start a round.
    Start,
    /// A round is in progress.
    Playing,
    /// Result screen, shown until the delay elapses or a key is pressed.
    Finished {
        status: GameStatus,
        word: String,
        since: Instant,
    },
}

/// Mutable application state tracking current screen and typed input.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Contents of the letter field, always uppercase.
    pub input: String,
    input_max_chars: usize,
}

impl AppState {
    pub fn new(input_max_chars: usize) -> Self {
        Self {
            mode: AppMode::Start,
            input: String::new(),
            input_max_chars: input_max_chars.max(1),
        }
    }

    /// Appends a typed character, uppercased. Ignored if the uppercased form
    /// would not fit in the field.
    pub fn push_char(&mut self, c: char) {
        let upper: String = c.to_uppercase().collect();
        if self.input.chars().count() + upper.chars().count() > self.input_max_chars {
            return;
        }
        self.input.push_str(&upper);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Empties the field and returns what it held.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn enter_playing(&mut self) {
        self.input.clear();
        self.mode = AppMode::Playing;
    }

    pub fn enter_finished(&mut self, status: GameStatus, word: String) {
        self.input.clear();
        self.mode = AppMode::Finished {
            status,
            word,
            since: Instant::now(),
        };
    }

    pub fn enter_start(&mut self) {
        self.input.clear();
        self.mode = AppMode::Start;
    }

    /// When the result screen should give way to the start screen.
    pub fn end_screen_deadline(&self, delay: std::time::Duration) -> Option<Instant> {
        match &self.mode {
            AppMode::Finished { since, .. } => Some(*since + delay),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::config::UiConfig::default().input_max_chars)
    }
}
