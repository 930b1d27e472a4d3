//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::dealer::RoundDealer;

/// Frontend abstraction for UI layers.
///
/// A frontend receives the session's [`RoundDealer`] and drives rounds from
/// user input until the player quits. Rules live in `game-core`; frontends
/// only collect input and render.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, GameSession, RoundDealer};
/// use anyhow::Result;
///
/// struct AutoPlayer;
///
/// #[async_trait]
/// impl Frontend for AutoPlayer {
///     async fn run(&mut self, dealer: RoundDealer) -> Result<()> {
///         let mut session = GameSession::new(dealer);
///         session.start_round();
///         for letter in "ETAOINSHRDLUCMFWYPVBGKJQXZ".chars() {
///             session.submit(&letter.to_string());
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, dealer: RoundDealer) -> Result<()>;
}
