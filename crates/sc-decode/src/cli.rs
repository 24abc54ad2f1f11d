//! Command-line argument definitions.

use camino::Utf8PathBuf;
use clap::Parser;
use sc_client_config::LogFormat;
use sc_client_types::{ClientCommand, ScEventType};

/// Decodes one sc-server response envelope into the typed result of the
/// command that produced it.
#[derive(Parser, Debug)]
#[command(name = "sc-decode", version)]
pub(crate) struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub(crate) config_path: Option<Utf8PathBuf>,
    /// Overrides the configured `tracing` filter.
    #[arg(long, value_name = "FILTER")]
    pub(crate) log_filter: Option<String>,
    /// Overrides the configured log format (`json` or `compact`).
    #[arg(long, value_name = "FORMAT")]
    pub(crate) log_format: Option<LogFormat>,
    /// Command that produced the envelope (for example `search_template`).
    #[arg(value_name = "COMMAND")]
    pub(crate) command: ClientCommand,
    /// Reads the envelope from a file instead of stdin.
    #[arg(long, short, value_name = "FILE")]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Event type of each submitted subscription, in request order.
    #[arg(long = "event-type", value_name = "TYPE")]
    pub(crate) event_types: Vec<ScEventType>,
    /// Server id of each cancelled subscription, paired with `--event-type`.
    #[arg(long = "event-id", value_name = "ID")]
    pub(crate) event_ids: Vec<u64>,
}
