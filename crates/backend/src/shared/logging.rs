use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// Install the global subscriber: console + append-only `backend.log`.
///
/// RUST_LOG takes precedence over the configured filter.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let path = log_file_path(logging);
    if let Some(log_dir) = path.parent() {
        std::fs::create_dir_all(log_dir)?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(&logging.filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))?;

    Ok(())
}

/// Relative directories are taken from the working directory
pub fn log_file_path(logging: &LoggingConfig) -> PathBuf {
    Path::new(&logging.dir).join("backend.log")
}

fn build_filter(configured: &str) -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(configured),
    }
}
