//! Client configuration: where content comes from and how the session is seeded.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use client_frontend_core::RoundDealer;
use game_content::{ConfigLoader, WordList, WordListLoader};
use game_core::GameConfig;

/// Configuration required to assemble a session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Word list file; the bundled list is used when unset.
    pub words_path: Option<PathBuf>,
    /// `GameConfig` TOML file; defaults are used when unset.
    pub game_config_path: Option<PathBuf>,
    pub seed: u64,
    pub session_id: String,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HANGMAN_WORDS` - Word list file (.ron, .toml or .txt)
    /// - `HANGMAN_CONFIG` - Game configuration TOML file
    /// - `HANGMAN_SEED` - Session seed (default: current time)
    /// - `HANGMAN_SESSION_ID` - Log directory name (default: `session_<unix secs>`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        let seed = lookup("HANGMAN_SEED")
            .and_then(|value| parse_seed(&value))
            .unwrap_or(now.as_nanos() as u64);

        let session_id = lookup("HANGMAN_SESSION_ID")
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("session_{}", now.as_secs()));

        Self {
            words_path: lookup("HANGMAN_WORDS").map(PathBuf::from),
            game_config_path: lookup("HANGMAN_CONFIG").map(PathBuf::from),
            seed,
            session_id,
        }
    }

    pub fn game_config(&self) -> Result<GameConfig> {
        match &self.game_config_path {
            Some(path) => ConfigLoader::load(path),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn word_list(&self, config: &GameConfig) -> Result<WordList> {
        match &self.words_path {
            Some(path) => WordListLoader::load(path, config),
            None => WordListLoader::builtin(config),
        }
    }

    /// Loads content and seeds a dealer for the session.
    pub fn dealer(&self) -> Result<RoundDealer> {
        let config = self.game_config().context("Failed to load game config")?;
        let words = self
            .word_list(&config)
            .context("Failed to load word list")?;

        tracing::info!(
            words = words.len(),
            seed = self.seed,
            custom_words = self.words_path.is_some(),
            "Content loaded"
        );

        Ok(RoundDealer::new(words, config, self.seed))
    }
}

/// Parses a seed value, warning when it is unusable so the time-based
/// fallback is not silent.
fn parse_seed(value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(seed) => Some(seed),
        Err(error) => {
            tracing::warn!(value, %error, "Ignoring invalid HANGMAN_SEED, using time-based seed");
            None
        }
    }
}
