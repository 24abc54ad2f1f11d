//! Shared configuration for the sc-client tools.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the binary. This crate owns the
//! first two layers.

mod defaults;
mod error;
mod logging;

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

pub use self::defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
};
pub use self::error::ConfigError;
pub use self::logging::{LogFormat, LogFormatParseError};

/// Settings shared by the sc-client binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `sc_client_decoder=debug`.
    pub log_filter: String,
    /// Output format of the log subscriber.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or
    /// names an unknown key.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::parse)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::read(path, source))?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::load_file`].
    pub fn load_optional(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load_file)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        log_filter: Option<String>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(filter) = log_filter {
            self.log_filter = filter;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}
