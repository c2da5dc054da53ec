//! # Logging
//!
//! Diagnostics go through `tracing`. The alternate screen owns stdout and
//! stderr while the UI runs, so the subscriber writes to a file instead:
//!
//! ```text
//! ~/.local/share/mdpeek/mdpeek.log
//! ```
//!
//! Logging is off unless `MDPEEK_LOG` is set to an `EnvFilter` directive
//! such as `debug` or `mdpeek=trace`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "MDPEEK_LOG";

/// Install the file subscriber if [`LOG_ENV`] is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> Result<Option<PathBuf>> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };

    let path = log_path()?;
    init_at(&path, &directive)?;
    Ok(Some(path))
}

/// Install a subscriber writing to `path` with the given filter directive.
pub fn init_at(path: &Path, directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid {LOG_ENV} filter: {directive}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "mdpeek")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("mdpeek.log"))
}
