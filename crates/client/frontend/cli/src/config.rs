//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `HANGMAN_INPUT_MAX_CHARS` - Characters the letter field accepts (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("HANGMAN_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        if let Some(max_chars) = read_env::<usize>("HANGMAN_INPUT_MAX_CHARS") {
            config.ui.input_max_chars = max_chars.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// The field accepts more than one character so the over-limit error can be shown.
    pub input_max_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
            input_max_chars: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
