//! Guessable letters and the used-letter log.
use core::fmt;
use core::str::FromStr;

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GameConfig;
use crate::state::LetterError;

/// An uppercase ASCII letter (`A`-`Z`).
///
/// Input is accepted in either case and normalised to uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct Letter(u8);

impl Letter {
    pub fn from_char(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    /// Parses raw text-field input. Exactly one character is accepted.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(LetterError::Empty)?;
        if chars.next().is_some() {
            return Err(LetterError::TooLong {
                len: input.chars().count(),
            });
        }
        Self::from_char(first)
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet, `A` = 0.
    pub const fn index(self) -> u32 {
        (self.0 - b'A') as u32
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

bitflags! {
    /// Set of letters, one bit per letter of the alphabet.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LetterSet: u32 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
        const E = 1 << 4;
        const F = 1 << 5;
        const G = 1 << 6;
        const H = 1 << 7;
        const I = 1 << 8;
        const J = 1 << 9;
        const K = 1 << 10;
        const L = 1 << 11;
        const M = 1 << 12;
        const N = 1 << 13;
        const O = 1 << 14;
        const P = 1 << 15;
        const Q = 1 << 16;
        const R = 1 << 17;
        const S = 1 << 18;
        const T = 1 << 19;
        const U = 1 << 20;
        const V = 1 << 21;
        const W = 1 << 22;
        const X = 1 << 23;
        const Y = 1 << 24;
        const Z = 1 << 25;
    }
}

impl LetterSet {
    pub const fn of(letter: Letter) -> Self {
        Self::from_bits_retain(1 << letter.index())
    }

    pub fn has(&self, letter: Letter) -> bool {
        self.contains(Self::of(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, letter| set | Self::of(letter))
    }
}

/// Append-only log of submitted letters.
///
/// Keeps insertion order for display and a [`LetterSet`] for membership.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsedLetters {
    order: ArrayVec<Letter, { GameConfig::ALPHABET_LEN }>,
    set: LetterSet,
}

impl UsedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `letter`. Returns `false` if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.set.has(letter) {
            return false;
        }
        // Each letter is stored at most once, so the alphabet-sized buffer cannot overflow.
        if self.order.try_push(letter).is_err() {
            return false;
        }
        self.set.insert(LetterSet::of(letter));
        true
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.set.has(letter)
    }

    pub fn as_slice(&self) -> &[Letter] {
        &self.order
    }

    pub fn as_set(&self) -> LetterSet {
        self.set
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }
}

impl fmt::Display for UsedLetters {
    /// Formats as `A, E, Z` in the order the letters were guessed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.order.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
