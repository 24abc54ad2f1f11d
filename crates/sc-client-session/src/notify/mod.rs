//! Delivery of server-pushed event notifications.
//!
//! When a watched element changes, the server pushes an envelope with
//! `event` set, the subscription id in `id`, and the three elements involved
//! in `payload`:
//!
//! ```json
//! {"event":true,"id":101,"status":true,"payload":[4711,4712,4713]}
//! ```
//!
//! The payload order is subscribed element, connector, other element.

use sc_client_types::{EventId, Response, ScAddr};
use serde::Deserialize;
use tracing::debug;

use crate::error::SessionError;
use crate::registry::{EventRegistry, REGISTRY_TARGET, SessionEvents};

/// Routes a notification to the callback of the subscription it names.
///
/// Returns `Ok(true)` when a callback ran and `Ok(false)` when no
/// subscription is registered under the id, which happens when a
/// notification crosses an unsubscribe in flight. The callback runs after
/// the registry lookup completes, so it may itself register or unregister
/// subscriptions.
///
/// # Errors
///
/// Returns [`SessionError::NotAnEvent`] for ordinary responses,
/// [`SessionError::MissingEventId`] when the envelope carries no id, and
/// [`SessionError::MalformedNotification`] when the payload is not three
/// addresses.
pub fn deliver_notification<R>(registry: &R, response: &Response) -> Result<bool, SessionError>
where
    R: EventRegistry + ?Sized,
{
    if !response.is_event() {
        return Err(SessionError::NotAnEvent);
    }
    let raw_id = response.id().ok_or(SessionError::MissingEventId)?;
    let payload = response
        .payload()
        .ok_or_else(|| SessionError::malformed(raw_id, "notification has no payload"))?;
    let [subscribed, connector, other] = <[u64; 3]>::deserialize(payload)
        .map_err(|error| SessionError::from_json_error(raw_id, error))?;

    let Some(event) = registry.get(EventId::new(raw_id)) else {
        debug!(
            target: REGISTRY_TARGET,
            event_id = raw_id,
            "dropping notification for unknown subscription"
        );
        return Ok(false);
    };

    event.callback().call(
        ScAddr::new(subscribed),
        ScAddr::new(connector),
        ScAddr::new(other),
    );
    Ok(true)
}

impl SessionEvents {
    /// Routes a notification through this registry.
    ///
    /// # Errors
    ///
    /// See [`deliver_notification`].
    pub fn notify(&self, response: &Response) -> Result<bool, SessionError> {
        deliver_notification(self, response)
    }
}
