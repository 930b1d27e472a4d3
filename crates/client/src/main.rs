//! Hangman game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Content (word list, game config) into a RoundDealer
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! ```bash
//! HANGMAN_WORDS=./my-words.txt HANGMAN_SEED=42 cargo run -p hangman-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use hangman_client::{Client, ClientConfig};

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(&client_config.session_id)?;

    tracing::info!("Starting Hangman client");
    tracing::info!("Session ID: {}", client_config.session_id);

    // 3. Load content and seed the dealer
    let dealer = client_config.dealer()?;

    // 4. Build Frontend
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().dealer(dealer).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
