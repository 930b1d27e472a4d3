//! Deterministic round logic and data types shared across clients.
//!
//! `game-core` defines the canonical Hangman rules (letter validation, reveal,
//! gallows progression, win/loss detection) and exposes pure APIs that the
//! content loaders and frontends build on. All round mutation flows through
//! [`state::GameState::guess`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GallowsStage, GameState, GameStatus, GuessError, GuessOutcome, GuessPattern, Letter,
    LetterError, LetterSet, MysteryWord, UsedLetters, WordError,
};
