//! Word list loader.
//!
//! Supported formats, chosen by file extension:
//!
//! ```text
//! words.ron   ["HANGMAN", "GALLOWS"]
//! words.toml  words = ["HANGMAN", "GALLOWS"]
//! words.txt   one word per line, `#` starts a comment line
//! ```

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};
use crate::words::WordList;

const BUILTIN_WORDS: &str = include_str!("../../data/words.ron");

#[derive(serde::Deserialize)]
struct WordsFile {
    words: Vec<String>,
}

/// Loader for [`WordList`]s.
pub struct WordListLoader;

impl WordListLoader {
    /// Loads the word list bundled with the game.
    pub fn builtin(config: &GameConfig) -> LoadResult<WordList> {
        Self::parse_ron(BUILTIN_WORDS, config)
            .map_err(|e| anyhow::anyhow!("Built-in word list is invalid: {}", e))
    }

    /// Loads a word list from `path`, picking the format by extension.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<WordList> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content = read_file(path)?;
        let list = match extension.as_deref() {
            Some("ron") => Self::parse_ron(&content, config),
            Some("toml") => Self::parse_toml(&content, config),
            Some("txt") => Self::parse_text(&content, config),
            _ => Err(anyhow::anyhow!(
                "Unsupported word list format (expected .ron, .toml or .txt)"
            )),
        };

        list.map_err(|e| anyhow::anyhow!("Failed to load word list {}: {}", path.display(), e))
    }

    pub fn parse_ron(content: &str, config: &GameConfig) -> LoadResult<WordList> {
        let words: Vec<String> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse word list RON: {}", e))?;
        Ok(WordList::new(words, config)?)
    }

    pub fn parse_toml(content: &str, config: &GameConfig) -> LoadResult<WordList> {
        let file: WordsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse word list TOML: {}", e))?;
        Ok(WordList::new(file.words, config)?)
    }

    pub fn parse_text(content: &str, config: &GameConfig) -> LoadResult<WordList> {
        let words = content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'));
        Ok(WordList::new(words, config)?)
    }
}
