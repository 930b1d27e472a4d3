//! Terminal UI frontend for Hangman.
//!
//! This crate implements [`client_frontend_core::Frontend`] on top of
//! ratatui and crossterm. It is a pure UI layer: rules live in `game-core`
//! and round flow in `client-frontend-core`'s `GameSession`.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
mod state;
pub mod strings;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};
pub use state::{AppMode, AppState};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
