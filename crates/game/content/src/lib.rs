//! Data-driven content definitions and loaders.
//!
//! This crate houses the word lists that mystery words are drawn from and
//! provides loaders for the data files a player can supply:
//! - Word lists (RON, TOML or plain text)
//! - Game configuration (TOML)
//!
//! Content is consumed by the round dealer and never appears in game state
//! beyond the chosen mystery word.

pub mod words;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use words::{WordList, WordListError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, WordListLoader};
