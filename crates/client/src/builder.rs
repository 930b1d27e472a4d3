//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_frontend_core::RoundDealer;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Both the dealer and the frontend are required; `build` fails fast when
/// either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    dealer: Option<RoundDealer>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round dealer (required).
    ///
    /// Usually built from [`crate::ClientConfig::dealer`].
    pub fn dealer(mut self, dealer: RoundDealer) -> Self {
        self.dealer = Some(dealer);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let dealer = self
            .dealer
            .context("Dealer is required. Use .dealer() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { dealer, frontend })
    }
}
