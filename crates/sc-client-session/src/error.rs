//! Errors raised while routing server-pushed notifications.

use std::sync::Arc;

use thiserror::Error;

/// Errors arising from session-side event handling.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The envelope answers a request rather than pushing an event.
    #[error("response is not an event notification")]
    NotAnEvent,

    /// The notification did not name the subscription it belongs to.
    #[error("event notification carries no event id")]
    MissingEventId,

    /// The notification payload did not have the expected shape.
    #[error("malformed event notification for event {event_id}: {message}")]
    MalformedNotification {
        /// Subscription the notification was addressed to.
        event_id: u64,
        /// Description of the shape violation.
        message: String,
        /// Underlying JSON error, when one was produced.
        #[source]
        source: Option<Arc<serde_json::Error>>,
    },
}

impl SessionError {
    /// Creates a malformed notification error without an underlying cause.
    #[must_use]
    pub fn malformed(event_id: u64, message: impl Into<String>) -> Self {
        Self::MalformedNotification {
            event_id,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a malformed notification error from a JSON error.
    #[must_use]
    pub fn from_json_error(event_id: u64, source: serde_json::Error) -> Self {
        Self::MalformedNotification {
            event_id,
            message: source.to_string(),
            source: Some(Arc::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_the_event() {
        let error = SessionError::malformed(42, "payload missing");
        let message = error.to_string();
        assert!(message.contains("42"), "expected id in message: {message}");
        assert!(
            message.contains("payload missing"),
            "expected detail in message: {message}"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionError>();
    }
}
