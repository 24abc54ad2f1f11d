//! Command-line runtime for decoding sc-server response envelopes.
//!
//! `sc-decode` reads one JSON envelope from a file or stdin, decodes it as the
//! result of the named command, and writes the typed result to stdout as a
//! single JSON line:
//!
//! ```text
//! $ echo '{"status":true,"payload":[4711]}' | sc-decode create_elements
//! {"command":"create_elements","result":[4711]}
//! ```
//!
//! Subscription commands take the request context on the command line:
//! `--event-type` once per submitted subscription for `events_create`, and
//! matching `--event-id`/`--event-type` pairs for `events_destroy`. IO streams
//! are injected so the runtime can be exercised from tests.

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser;
use sc_client_config::Config;
use sc_client_decoder::{CommandContext, Decoded, ResponseProcessor};
use sc_client_session::{EventRegistry, SessionEvents};
use sc_client_types::{
    ClientCommand, EventCallback, EventId, Response, ScAddr, ScEvent, ScEventParams, ScEventType,
};
use tracing::info;

mod cli;
mod errors;
mod telemetry;

use cli::Cli;
use errors::AppError;

/// Tracing target for subscription callbacks installed by the CLI.
const NOTIFY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::notify");

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    match try_run(args, stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            // --help and --version
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(AppError::CliUsage(error)) => {
            // clap renders its own `error:` prefix and usage hint.
            let _ = write!(stderr, "{error}");
            ExitCode::FAILURE
        }
        Err(error) => {
            let _ = writeln!(stderr, "error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, R, W>(args: I, stdin: &mut R, stdout: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
{
    let cli = Cli::try_parse_from(args).map_err(AppError::CliUsage)?;
    let config = Config::load_optional(cli.config_path.as_deref())?
        .with_overrides(cli.log_filter.clone(), cli.log_format);
    telemetry::initialise(&config)?;

    let response = read_envelope(cli.input.as_deref(), stdin)?;
    let decoded = decode(&cli, SessionEvents::global(), &response)?;

    serde_json::to_writer(&mut *stdout, &decoded).map_err(AppError::Serialise)?;
    writeln!(stdout).map_err(AppError::Write)?;
    stdout.flush().map_err(AppError::Write)
}

fn read_envelope<R: Read>(input: Option<&Utf8Path>, stdin: &mut R) -> Result<Response, AppError> {
    let bytes = match input {
        Some(path) => fs::read(path).map_err(|source| AppError::ReadInput {
            path: path.to_owned(),
            source,
        })?,
        None => {
            let mut bytes = Vec::new();
            stdin.read_to_end(&mut bytes).map_err(AppError::ReadStdin)?;
            bytes
        }
    };
    Ok(Response::from_json_line(&bytes)?)
}

fn decode<G>(cli: &Cli, registry: &G, response: &Response) -> Result<Decoded, AppError>
where
    G: EventRegistry + ?Sized,
{
    let processor = ResponseProcessor::new(registry);
    let decoded = match (CommandContext::stateless(cli.command), cli.command) {
        (Some(context), command) => {
            if !cli.event_types.is_empty() || !cli.event_ids.is_empty() {
                return Err(AppError::UnexpectedEventArguments { command });
            }
            processor.run(context, response)?
        }
        (None, ClientCommand::EventsCreate) => {
            let params: Vec<ScEventParams> = cli
                .event_types
                .iter()
                .map(|&event_type| {
                    ScEventParams::new(ScAddr::EMPTY, event_type, logging_callback(event_type))
                })
                .collect();
            processor.run(CommandContext::EventsCreate(&params), response)?
        }
        (None, _) => {
            let events = cancelled_events(cli, registry)?;
            processor.run(CommandContext::EventsDestroy(&events), response)?
        }
    };
    Ok(decoded)
}

/// Rebuilds the events named by `--event-id`, preferring live registrations.
fn cancelled_events<G>(cli: &Cli, registry: &G) -> Result<Vec<ScEvent>, AppError>
where
    G: EventRegistry + ?Sized,
{
    if cli.event_ids.len() != cli.event_types.len() {
        return Err(AppError::UnpairedEventArguments {
            ids: cli.event_ids.len(),
            types: cli.event_types.len(),
        });
    }
    Ok(cli
        .event_ids
        .iter()
        .zip(&cli.event_types)
        .map(|(&raw_id, &event_type)| {
            let id = EventId::new(raw_id);
            registry
                .get(id)
                .unwrap_or_else(|| ScEvent::new(id, event_type, logging_callback(event_type)))
        })
        .collect())
}

fn logging_callback(event_type: ScEventType) -> EventCallback {
    EventCallback::new(move |subscribed, connector, other| {
        info!(
            target: NOTIFY_TARGET,
            %event_type,
            subscribed = subscribed.value(),
            connector = connector.value(),
            other = other.value(),
            "event notification"
        );
    })
}
