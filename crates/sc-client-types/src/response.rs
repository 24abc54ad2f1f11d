//! The generic response envelope returned by the sc-server.
//!
//! Every reply, whether it answers a request or pushes an event notification,
//! shares one JSON shape:
//!
//! ```json
//! {"id":7,"event":false,"status":true,"payload":[4711,4712]}
//! ```
//!
//! Only `status` is mandatory. The meaning of `payload` depends on the
//! command that produced the envelope and is left to the decoders.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Response envelope received from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(default)]
    event: bool,
    status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<Value>,
}

impl Response {
    /// Creates a request response with the given status and payload.
    #[must_use]
    pub const fn new(status: bool, payload: Option<Value>) -> Self {
        Self {
            id: None,
            event: false,
            status,
            payload,
            errors: None,
        }
    }

    /// Creates a successful response carrying `payload`.
    #[must_use]
    pub const fn success(payload: Value) -> Self {
        Self::new(true, Some(payload))
    }

    /// Creates a failed response without payload.
    #[must_use]
    pub const fn failure() -> Self {
        Self::new(false, None)
    }

    /// Attaches the correlation identifier.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Marks the envelope as a server-pushed event notification.
    #[must_use]
    pub fn as_event(mut self) -> Self {
        self.event = true;
        self
    }

    /// Attaches the server's error report.
    #[must_use]
    pub fn with_errors(mut self, errors: Value) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Parses one JSONL line into an envelope.
    ///
    /// Trailing whitespace, including the newline delimiter, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Empty`] for blank lines and
    /// [`EnvelopeError::Json`] when the line is not a valid envelope.
    pub fn from_json_line(line: &[u8]) -> Result<Self, EnvelopeError> {
        let trimmed = line.trim_ascii_end();
        if trimmed.is_empty() {
            return Err(EnvelopeError::Empty);
        }
        serde_json::from_slice(trimmed).map_err(|source| EnvelopeError::Json(Arc::new(source)))
    }

    /// Returns the server status flag.
    #[must_use]
    pub const fn status(&self) -> bool {
        self.status
    }

    /// Returns the payload when present.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Returns the correlation identifier.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns `true` for server-pushed event notifications.
    #[must_use]
    pub const fn is_event(&self) -> bool {
        self.event
    }

    /// Returns the server's error report when present.
    #[must_use]
    pub const fn errors(&self) -> Option<&Value> {
        self.errors.as_ref()
    }
}

/// Errors raised while parsing a response envelope.
#[derive(Debug, Clone, Error)]
pub enum EnvelopeError {
    /// The line held no data.
    #[error("empty response line")]
    Empty,
    /// The line was not a valid response envelope.
    #[error("malformed response envelope: {0}")]
    Json(#[source] Arc<serde_json::Error>),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_minimal_envelope() {
        let response = Response::from_json_line(br#"{"status":true}"#).expect("parse");
        assert!(response.status());
        assert_eq!(response.payload(), None);
        assert_eq!(response.id(), None);
        assert!(!response.is_event());
    }

    #[test]
    fn parses_full_envelope() {
        let line = br#"{"id":3,"event":true,"status":false,"payload":[1],"errors":"boom"}"#;
        let response = Response::from_json_line(line).expect("parse");
        assert_eq!(response.id(), Some(3));
        assert!(response.is_event());
        assert!(!response.status());
        assert_eq!(response.payload(), Some(&json!([1])));
        assert_eq!(response.errors(), Some(&json!("boom")));
    }

    #[test]
    fn null_payload_reads_as_absent() {
        let response =
            Response::from_json_line(br#"{"status":true,"payload":null}"#).expect("parse");
        assert_eq!(response.payload(), None);
    }

    #[test]
    fn trims_trailing_newline() {
        let response = Response::from_json_line(b"{\"status\":true}  \n").expect("parse");
        assert!(response.status());
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::whitespace(b"  \n".as_slice())]
    fn rejects_blank_lines(#[case] line: &[u8]) {
        let error = Response::from_json_line(line).expect_err("blank");
        assert!(matches!(error, EnvelopeError::Empty));
    }

    #[rstest]
    #[case::not_json(b"not json".as_slice())]
    #[case::missing_status(br#"{"payload":[1]}"#.as_slice())]
    fn rejects_malformed_envelopes(#[case] line: &[u8]) {
        let error = Response::from_json_line(line).expect_err("malformed");
        assert!(matches!(error, EnvelopeError::Json(_)));
    }

    #[test]
    fn builder_round_trips_through_json() {
        let response = Response::success(json!([7])).with_id(9);
        let json = serde_json::to_vec(&response).expect("serialise");
        let back = Response::from_json_line(&json).expect("parse");
        assert_eq!(back, response);
    }
}
