use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::args::LogLevel;

/// Log file written by `browse`, relative to the data directory
pub const LOG_FILE_NAME: &str = "shopfront.log";

/// HTTP internals are noisy below warn
const QUIET_TARGETS: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}", level.as_str(), QUIET_TARGETS)))
}

/// Log to stderr; used by one-shot commands
pub fn init_stderr(level: LogLevel) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed when running in-process tests
    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(layer)
        .try_init();
}

/// Log to `<data_dir>/shopfront.log`; the TUI owns the terminal
pub fn init_file(level: LogLevel, data_dir: &Path) -> Result<()> {
    shopfront_core::ensure_dir(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(layer)
        .try_init();

    tracing::info!(path = %log_path.display(), "browse session started");
    Ok(())
}
