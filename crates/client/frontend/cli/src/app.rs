//! Glue code tying the session, message log, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{
    EventConsumer, Frontend, FrontendConfig, GameSession, MessageConsumer, MessageLog,
    RoundDealer,
};

use crate::config::CliConfig;
use crate::presentation::{event_loop::EventLoop, terminal};

/// Terminal frontend. Owns the screen for the duration of [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, dealer: RoundDealer) -> Result<()> {
        tracing::info!(
            words = dealer.words().len(),
            seed = dealer.seed(),
            "CLI frontend starting"
        );

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard::new();

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome! Guess the word one letter at a time.");

        let event_loop = EventLoop::new(
            GameSession::new(dealer),
            MessageConsumer::new(messages),
            &self.frontend_config,
            &self.cli_config,
        );

        let consumer = event_loop.run(&mut terminal).await?;

        guard.restore()?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
