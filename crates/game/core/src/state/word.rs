//! Mystery word and the partially revealed guess pattern.
use core::fmt;

use crate::config::GameConfig;
use crate::state::{Letter, LetterSet, WordError};

/// The word to be guessed. Immutable once the round starts.
///
/// Stored in uppercase. Besides letters it may contain a few separators
/// (space, hyphen, apostrophe), which are never guessed and are shown in the
/// pattern from the start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MysteryWord {
    text: String,
    letters: LetterSet,
}

impl MysteryWord {
    pub const SEPARATORS: [char; 3] = [' ', '-', '\''];

    pub fn new(word: &str) -> Result<Self, WordError> {
        Self::with_config(word, &GameConfig::default())
    }

    pub fn with_config(word: &str, config: &GameConfig) -> Result<Self, WordError> {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let text: String = trimmed.chars().map(|c| c.to_ascii_uppercase()).collect();
        let mut letters = LetterSet::empty();
        let mut letter_count = 0;
        for c in text.chars() {
            if let Ok(letter) = Letter::from_char(c) {
                letters |= LetterSet::of(letter);
                letter_count += 1;
            } else if !Self::is_separator(c) {
                return Err(WordError::UnsupportedChar {
                    word: trimmed.to_string(),
                    found: c,
                });
            }
        }

        if letter_count < config.min_word_len {
            return Err(WordError::TooShort {
                word: text,
                letters: letter_count,
                min: config.min_word_len,
            });
        }

        Ok(Self { text, letters })
    }

    pub fn is_separator(c: char) -> bool {
        Self::SEPARATORS.contains(&c)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.has(letter)
    }

    /// Distinct letters appearing in the word.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Length in characters, separators included.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for MysteryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What the player currently sees of the mystery word.
///
/// Always has one cell per character of the word. Which letters are shown
/// is tracked apart from the cell glyphs, so the placeholder never decides
/// whether a position counts as revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessPattern {
    cells: Vec<char>,
    shown: LetterSet,
    hidden: usize,
}

impl GuessPattern {
    /// Masks every letter of `word` with `placeholder`.
    ///
    /// A placeholder that [`GameConfig::validate`] would reject is replaced
    /// by [`GameConfig::DEFAULT_PLACEHOLDER`].
    pub fn masked(word: &MysteryWord, placeholder: char) -> Self {
        let placeholder = if GameConfig::is_ambiguous_placeholder(placeholder) {
            GameConfig::DEFAULT_PLACEHOLDER
        } else {
            placeholder
        };

        let mut hidden = 0;
        let cells = word
            .chars()
            .map(|c| {
                if MysteryWord::is_separator(c) {
                    c
                } else {
                    hidden += 1;
                    placeholder
                }
            })
            .collect();
        Self {
            cells,
            shown: LetterSet::empty(),
            hidden,
        }
    }

    /// Reveals every position of `word` holding `letter`.
    ///
    /// Returns how many cells were newly revealed.
    pub(crate) fn reveal(&mut self, word: &MysteryWord, letter: Letter) -> usize {
        if self.shown.has(letter) {
            return 0;
        }
        self.shown |= LetterSet::of(letter);

        let target = letter.as_char();
        let mut revealed = 0;
        for (cell, c) in self.cells.iter_mut().zip(word.chars()) {
            if c == target {
                *cell = target;
                revealed += 1;
            }
        }
        self.hidden -= revealed;
        revealed
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of letter positions still masked.
    pub fn hidden_count(&self) -> usize {
        self.hidden
    }

    pub fn is_complete(&self) -> bool {
        self.hidden == 0
    }

    /// True when the pattern reads exactly as `word`.
    pub fn matches(&self, word: &MysteryWord) -> bool {
        self.cells.iter().copied().eq(word.chars())
    }
}

impl fmt::Display for GuessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn word_is_uppercased_and_trimmed() {
        let word = MysteryWord::new("  kotlin ").unwrap();
        assert_eq!(word.as_str(), "KOTLIN");
        assert!(word.contains(letter('k')));
        assert!(!word.contains(letter('z')));
    }

    #[test]
    fn word_rejects_empty_and_unsupported() {
        assert_eq!(MysteryWord::new("   "), Err(WordError::Empty));
        assert_eq!(
            MysteryWord::new("R2D2"),
            Err(WordError::UnsupportedChar {
                word: "R2D2".to_string(),
                found: '2'
            })
        );
        assert!(matches!(
            MysteryWord::new("-"),
            Err(WordError::TooShort { letters: 0, .. })
        ));
    }

    #[test]
    fn min_word_len_counts_letters_only() {
        let config = GameConfig::new().with_min_word_len(4);
        assert!(MysteryWord::with_config("A-B-C", &config).is_err());
        assert!(MysteryWord::with_config("ABCD", &config).is_ok());
    }

    #[test]
    fn separators_are_pre_revealed() {
        let word = MysteryWord::new("ice-cream").unwrap();
        let pattern = GuessPattern::masked(&word, '_');
        assert_eq!(pattern.to_string(), "___-_____");
        assert_eq!(pattern.len(), word.len());
        assert_eq!(pattern.hidden_count(), 8);
    }

    #[test]
    fn reveal_uncovers_all_matching_positions() {
        let word = MysteryWord::new("BANANA").unwrap();
        let mut pattern = GuessPattern::masked(&word, '_');

        assert_eq!(pattern.reveal(&word, letter('A')), 3);
        assert_eq!(pattern.to_string(), "_A_A_A");
        assert_eq!(pattern.reveal(&word, letter('A')), 0);
        assert_eq!(pattern.reveal(&word, letter('X')), 0);

        pattern.reveal(&word, letter('B'));
        pattern.reveal(&word, letter('N'));
        assert!(pattern.is_complete());
        assert!(pattern.matches(&word));
    }
}
