//! Decoders for event subscription and unsubscription.
//!
//! These are the only decoders with side effects: they update the
//! [`EventRegistry`] so that server-pushed notifications can find their
//! callbacks.

use sc_client_session::EventRegistry;
use sc_client_types::{ClientCommand, EventId, Response, ScEvent, ScEventParams};
use tracing::debug;

use super::DECODE_TARGET;
use super::payload::{parse, require};
use crate::error::DecodeError;

/// Registers the subscriptions acknowledged by the server.
///
/// The payload lists one server-assigned id per submitted descriptor, in
/// submission order. Each id is paired with its descriptor's event type and
/// callback, registered, and returned in the same order. Every subscription
/// is visible in `registry` by the time this returns.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] or
/// [`DecodeError::MalformedPayload`] when the payload is not a list of ids,
/// and [`DecodeError::AcknowledgementMismatch`] when the number of ids
/// differs from the number of descriptors. Nothing is registered on error.
pub fn events_create<R>(
    registry: &R,
    response: &Response,
    params: &[ScEventParams],
) -> Result<Vec<ScEvent>, DecodeError>
where
    R: EventRegistry + ?Sized,
{
    let command = ClientCommand::EventsCreate;
    let ids: Vec<EventId> = parse(command, require(command, response)?)?;
    if ids.len() != params.len() {
        return Err(DecodeError::acknowledgement_mismatch(params.len(), ids.len()));
    }

    let events: Vec<ScEvent> = ids
        .into_iter()
        .zip(params)
        .map(|(id, descriptor)| {
            ScEvent::new(id, descriptor.event_type(), descriptor.callback().clone())
        })
        .collect();
    for event in &events {
        registry.register(event.clone());
    }
    debug!(target: DECODE_TARGET, count = events.len(), "registered acknowledged subscriptions");
    Ok(events)
}

/// Unregisters the cancelled subscriptions and returns the server status.
///
/// Every event is unregistered even when the status is `false`: once an
/// unsubscribe is sent the server no longer tracks the subscription.
#[must_use = "the status reports whether the server accepted the unsubscribe"]
pub fn events_destroy<R>(registry: &R, response: &Response, events: &[ScEvent]) -> bool
where
    R: EventRegistry + ?Sized,
{
    for event in events {
        registry.unregister(event.id());
    }
    debug!(
        target: DECODE_TARGET,
        count = events.len(),
        status = response.status(),
        "unregistered cancelled subscriptions"
    );
    response.status()
}
