//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub rounds: RoundConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, rounds: RoundConfig) -> Self {
        Self { messages, rounds }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `HANGMAN_END_SCREEN_DELAY_MS` - How long the result screen stays up (default: 2000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("HANGMAN_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(delay) = read_env::<u64>("HANGMAN_END_SCREEN_DELAY_MS") {
            config.rounds.end_screen_delay = Duration::from_millis(delay);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug)]
pub struct RoundConfig {
    /// Time the won/lost screen is shown before returning to the start screen.
    pub end_screen_delay: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            end_screen_delay: Duration::from_millis(2000),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
