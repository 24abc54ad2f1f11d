//! Registry of live event subscriptions keyed by server event id.
//!
//! [`EventRegistry`] is the capability the response decoders receive: they
//! register a subscription after the server acknowledges it and unregister
//! it once an unsubscribe request is answered. [`SessionEvents`] stores the
//! subscriptions behind a mutex so one instance can be shared process-wide.
//!
//! Individual calls are serialised, but a register and an unregister racing
//! on the same id are not ordered here; the session must not issue them
//! concurrently.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use sc_client_types::{EventId, ScEvent};
use tracing::debug;

/// Tracing target for registry operations.
pub(crate) const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

static GLOBAL_EVENTS: Lazy<SessionEvents> = Lazy::new(SessionEvents::new);

/// Store of acknowledged subscriptions.
pub trait EventRegistry {
    /// Records a subscription, replacing any previous entry with the same id.
    fn register(&self, event: ScEvent);

    /// Removes a subscription, returning it when it was present.
    fn unregister(&self, id: EventId) -> Option<ScEvent>;

    /// Returns a handle to the subscription registered under `id`.
    fn get(&self, id: EventId) -> Option<ScEvent>;

    /// Returns `true` when a subscription is registered under `id`.
    fn contains(&self, id: EventId) -> bool {
        self.get(id).is_some()
    }
}

/// Mutex-backed [`EventRegistry`].
///
/// # Example
///
/// ```
/// use sc_client_session::{EventRegistry, SessionEvents};
/// use sc_client_types::{EventCallback, EventId, ScEvent, ScEventType};
///
/// let events = SessionEvents::new();
/// let id = EventId::new(101);
/// events.register(ScEvent::new(id, ScEventType::DeleteElement, EventCallback::new(|_, _, _| {})));
/// assert!(events.contains(id));
/// assert!(events.unregister(id).is_some());
/// assert!(events.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SessionEvents {
    events: Mutex<HashMap<EventId, ScEvent>>,
}

impl SessionEvents {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry shared by every client session.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_EVENTS
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when no subscription is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the ids of all live subscriptions in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<EventId> {
        let mut ids: Vec<EventId> = self.lock().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Drops every subscription, returning how many were removed.
    pub fn clear(&self) -> usize {
        let mut events = self.lock();
        let removed = events.len();
        events.clear();
        removed
    }

    // A panic while holding the lock cannot leave the map half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<EventId, ScEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventRegistry for SessionEvents {
    fn register(&self, event: ScEvent) {
        let id = event.id();
        let replaced = self.lock().insert(id, event).is_some();
        debug!(
            target: REGISTRY_TARGET,
            event_id = id.value(),
            replaced,
            "registered event subscription"
        );
    }

    fn unregister(&self, id: EventId) -> Option<ScEvent> {
        let removed = self.lock().remove(&id);
        debug!(
            target: REGISTRY_TARGET,
            event_id = id.value(),
            found = removed.is_some(),
            "unregistered event subscription"
        );
        removed
    }

    fn get(&self, id: EventId) -> Option<ScEvent> {
        self.lock().get(&id).cloned()
    }
}
