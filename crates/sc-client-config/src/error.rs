use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The configuration text is not valid.
    #[error("invalid configuration: {source}")]
    Parse {
        /// Underlying TOML error.
        #[source]
        source: Arc<toml::de::Error>,
    },
}

impl ConfigError {
    pub(crate) fn read(path: &Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_owned(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn parse(source: toml::de::Error) -> Self {
        Self::Parse {
            source: Arc::new(source),
        }
    }
}
