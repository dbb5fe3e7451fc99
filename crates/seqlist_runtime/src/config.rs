//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then environment variables,
//! then command-line flags (applied by the binary through the builder
//! methods).

use std::path::PathBuf;

use seqlist_codec::Format;
use seqlist_foundation::{Error, Result};

/// Environment variable naming the data directory.
pub const ENV_DATA_DIR: &str = "SEQLIST_DATA_DIR";

/// Environment variable naming the default file format.
pub const ENV_FORMAT: &str = "SEQLIST_FORMAT";

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "SEQLIST_LOG";

/// Configuration for a session and its command shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory that relative save/load paths are resolved against.
    pub data_dir: PathBuf,

    /// Format used when a save/load does not name one.
    pub default_format: Format,

    /// Number of lines kept in the interactive history.
    pub history_size: usize,

    /// Whether the interactive shell prints its banner.
    pub show_banner: bool,

    /// `tracing` filter directives, e.g. `warn` or `seqlist_codec=debug`.
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            default_format: Format::Text,
            history_size: 1000,
            show_banner: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    ///
    /// Returns a format error if `SEQLIST_FORMAT` names no known format.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with variables read through `lookup`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns a format error if `SEQLIST_FORMAT` names no known format.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = var(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(format) = var(ENV_FORMAT) {
            config.default_format = format
                .parse()
                .map_err(|e: Error| Error::format(format!("{ENV_FORMAT}: {e}")))?;
        }
        if let Some(filter) = var(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Builder method to set the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Builder method to set the default format.
    #[must_use]
    pub fn with_default_format(mut self, format: Format) -> Self {
        self.default_format = format;
        self
    }

    /// Builder method to set the history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

/// Log level for a repeated `-v` count: warn, info, debug, then trace.
#[must_use]
pub const fn verbosity_filter(count: u8) -> &'static str {
    match count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
