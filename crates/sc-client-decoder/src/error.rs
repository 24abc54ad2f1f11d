//! Errors raised while decoding response payloads.
//!
//! A failed server operation is not an error here: decoders report it
//! through the typed result (a `false` status, an empty search, an absent
//! generation). These variants cover envelopes that break the wire contract
//! for their command.

use std::sync::Arc;

use sc_client_types::ClientCommand;
use thiserror::Error;

/// Errors surfaced when a payload does not match its command's contract.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// The command requires a payload but the envelope carried none.
    #[error("{command} response carries no payload")]
    MissingPayload {
        /// Command whose response was decoded.
        command: ClientCommand,
    },

    /// The payload did not have the shape the command defines.
    #[error("malformed {command} payload: {message}")]
    MalformedPayload {
        /// Command whose response was decoded.
        command: ClientCommand,
        /// Description of the shape violation.
        message: String,
        /// Underlying JSON error, when one was produced.
        #[source]
        source: Option<Arc<serde_json::Error>>,
    },

    /// The server acknowledged a different number of subscriptions than
    /// were requested.
    #[error(
        "events_create acknowledged {acknowledged} event(s) but {requested} were requested"
    )]
    AcknowledgementMismatch {
        /// Number of event descriptors sent with the request.
        requested: usize,
        /// Number of event ids returned by the server.
        acknowledged: usize,
    },
}

impl DecodeError {
    /// Creates a missing payload error.
    #[must_use]
    pub const fn missing_payload(command: ClientCommand) -> Self {
        Self::MissingPayload { command }
    }

    /// Creates a malformed payload error with a custom message.
    #[must_use]
    pub fn malformed(command: ClientCommand, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            command,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a malformed payload error from a serde error.
    #[must_use]
    pub fn from_json_error(command: ClientCommand, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            command,
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }

    /// Creates an acknowledgement mismatch error.
    #[must_use]
    pub const fn acknowledgement_mismatch(requested: usize, acknowledged: usize) -> Self {
        Self::AcknowledgementMismatch {
            requested,
            acknowledged,
        }
    }

    /// Returns the command whose response failed to decode.
    #[must_use]
    pub const fn command(&self) -> ClientCommand {
        match self {
            Self::MissingPayload { command } | Self::MalformedPayload { command, .. } => *command,
            Self::AcknowledgementMismatch { .. } => ClientCommand::EventsCreate,
        }
    }
}
