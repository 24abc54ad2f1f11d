//! Error types for the CLI runtime.

use std::io;

use camino::Utf8PathBuf;
use sc_client_config::ConfigError;
use sc_client_decoder::DecodeError;
use sc_client_types::{ClientCommand, EnvelopeError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read envelope from {path}: {source}")]
    ReadInput { path: Utf8PathBuf, source: io::Error },
    #[error("failed to read envelope from stdin: {0}")]
    ReadStdin(io::Error),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error("{command} takes no event arguments")]
    UnexpectedEventArguments { command: ClientCommand },
    #[error("events_destroy needs one --event-type per --event-id (got {ids} ids, {types} types)")]
    UnpairedEventArguments { ids: usize, types: usize },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to serialise decoded result: {0}")]
    Serialise(serde_json::Error),
    #[error("failed to write decoded result: {0}")]
    Write(io::Error),
}
