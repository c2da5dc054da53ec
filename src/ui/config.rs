//! # Configuration
//!
//! Optional user settings stored in `~/.config/mdpeek/config.json`.
//!
//! ## Overview
//!
//! Every field has a default, so an empty object, a missing file, or a file
//! that fails to parse all yield a usable [`Config`]. Command-line flags are
//! applied on top by the binary.
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "notice_delay_ms": 2000,
//!   "padding": 5,
//!   "extensions": ["md", "markdown"],
//!   "show_hidden": false
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// How long a rejected-selection notice stays on screen.
    #[serde(default = "default_notice_delay_ms")]
    pub notice_delay_ms: u64,

    /// Horizontal padding inside the panel, also subtracted twice from the
    /// terminal height to size the viewport.
    #[serde(default = "default_padding")]
    pub padding: u16,

    /// Extensions that may be opened, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// List dot-files in the browser.
    #[serde(default)]
    pub show_hidden: bool,
}

fn default_theme_name() -> String {
    "Midnight".to_string()
}

fn default_notice_delay_ms() -> u64 {
    1000
}

fn default_padding() -> u16 {
    5
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            notice_delay_ms: default_notice_delay_ms(),
            padding: default_padding(),
            extensions: default_extensions(),
            show_hidden: false,
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "using default configuration");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms)
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "mdpeek")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
