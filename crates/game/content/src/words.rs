//! Validated collection of candidate mystery words.

use std::collections::HashSet;

use game_core::{GameConfig, MysteryWord, RngOracle, WordError};

/// Errors raised while assembling a [`WordList`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("word #{index} is not a valid mystery word: {source}")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },
}

impl game_core::GameError for WordListError {
    fn severity(&self) -> game_core::ErrorSeverity {
        game_core::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "WORD_LIST_EMPTY",
            Self::InvalidWord { .. } => "WORD_LIST_INVALID_WORD",
        }
    }
}

/// Non-empty, de-duplicated list of mystery words.
///
/// Every entry has already passed [`MysteryWord`] validation, so any pick
/// can start a round without further checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<MysteryWord>,
}

impl WordList {
    /// Builds a list from raw strings, keeping the first occurrence of each word.
    ///
    /// Blank entries are skipped; any other invalid entry fails the whole list.
    pub fn new<I, S>(words: I, config: &GameConfig) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = Vec::new();

        for (index, raw) in words.into_iter().enumerate() {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            let word = MysteryWord::with_config(raw, config)
                .map_err(|source| WordListError::InvalidWord { index, source })?;
            if seen.insert(word.as_str().to_string()) {
                list.push(word);
            }
        }

        if list.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words: list })
    }

    /// Picks the word for a draw identified by `seed`.
    pub fn pick<R: RngOracle + ?Sized>(&self, rng: &R, seed: u64) -> &MysteryWord {
        let index = rng.pick_index(seed, self.words.len()).unwrap_or(0);
        &self.words[index]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let upper = word.trim().to_ascii_uppercase();
        self.words.iter().any(|w| w.as_str() == upper)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MysteryWord> {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::PcgRng;

    #[test]
    fn normalises_and_deduplicates() {
        let list = WordList::new(["cat", "CAT", " dog ", ""], &GameConfig::default()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("cat"));
        assert!(list.contains("Dog"));
    }

    #[test]
    fn rejects_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(
            WordList::new(empty, &GameConfig::default()),
            Err(WordListError::Empty)
        );
        assert_eq!(
            WordList::new(["  ", ""], &GameConfig::default()),
            Err(WordListError::Empty)
        );
    }

    #[test]
    fn reports_index_of_invalid_word() {
        let err = WordList::new(["cat", "c4t"], &GameConfig::default()).unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord { index: 1, .. }));
    }

    #[test]
    fn honours_min_word_len() {
        let config = GameConfig::new().with_min_word_len(4);
        let err = WordList::new(["tree", "ox"], &config).unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord { index: 1, .. }));
    }

    #[test]
    fn pick_is_deterministic_and_from_the_list() {
        let list = WordList::new(["amber", "mummy", "opals", "sonar"], &GameConfig::default())
            .unwrap();
        let rng = PcgRng;
        for seed in 0..20 {
            let first = list.pick(&rng, seed);
            assert_eq!(first, list.pick(&rng, seed));
            assert!(list.contains(first.as_str()));
        }
    }
}
