//! File-only tracing setup for the terminal client.
//!
//! The TUI owns stdout/stderr while it runs, so log output goes to
//! `<cache dir>/hangman/logs/<session>/client.log` instead.
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the whole process.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform-specific log directory.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "hangman")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("hangman").join("logs"))
}
