//! Top-level client wiring content, the round dealer, and a frontend.
//!
//! ```text
//! Client
//!   ├─→ RoundDealer (word list, game config, session seed)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The binary builds both from [`ClientConfig`] and hands control to the
//! frontend until the player quits.

mod builder;
mod config;

pub use builder::ClientBuilder;
pub use config::ClientConfig;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::RoundDealer;

/// Top-level client container.
pub struct Client {
    dealer: RoundDealer,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the player quits.
    pub async fn run(self) -> Result<()> {
        let Client {
            dealer,
            mut frontend,
        } = self;

        let seed = dealer.seed();
        let result = frontend.run(dealer).await;

        match &result {
            Ok(()) => tracing::info!(seed, "Frontend finished"),
            Err(e) => tracing::error!(seed, "Frontend error: {:#}", e),
        }

        result
    }
}
