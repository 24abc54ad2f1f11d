//! Event subscriptions and the descriptors that request them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::addr::ScAddr;

/// Server-assigned identifier of an event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of change a subscription listens for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScEventType {
    /// A connector leaving the subscribed element was added.
    AddOutgoingEdge,
    /// A connector entering the subscribed element was added.
    AddIngoingEdge,
    /// A connector leaving the subscribed element was removed.
    RemoveOutgoingEdge,
    /// A connector entering the subscribed element was removed.
    RemoveIngoingEdge,
    /// The subscribed element was deleted.
    DeleteElement,
    /// The content of the subscribed link changed.
    ContentChange,
}

/// Callback invoked when the server pushes a notification for a subscription.
///
/// Arguments are the subscribed element, the connector involved, and the
/// element at the other end of that connector. Cloning shares the closure.
#[derive(Clone)]
pub struct EventCallback(Arc<dyn Fn(ScAddr, ScAddr, ScAddr) + Send + Sync>);

impl EventCallback {
    /// Wraps a closure as an event callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(ScAddr, ScAddr, ScAddr) + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invokes the callback.
    pub fn call(&self, subscribed: ScAddr, connector: ScAddr, other: ScAddr) {
        (self.0)(subscribed, connector, other);
    }

    /// Returns `true` when both handles share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventCallback(..)")
    }
}

/// Descriptor submitted in an `events_create` request.
#[derive(Debug, Clone)]
pub struct ScEventParams {
    addr: ScAddr,
    event_type: ScEventType,
    callback: EventCallback,
}

impl ScEventParams {
    /// Describes a subscription on `addr` for `event_type`.
    #[must_use]
    pub const fn new(addr: ScAddr, event_type: ScEventType, callback: EventCallback) -> Self {
        Self {
            addr,
            event_type,
            callback,
        }
    }

    /// Returns the element to watch.
    #[must_use]
    pub const fn addr(&self) -> ScAddr {
        self.addr
    }

    /// Returns the kind of change to watch for.
    #[must_use]
    pub const fn event_type(&self) -> ScEventType {
        self.event_type
    }

    /// Returns the callback to run on notification.
    #[must_use]
    pub const fn callback(&self) -> &EventCallback {
        &self.callback
    }
}

/// Client-side handle of an acknowledged subscription.
///
/// Serialises as `{"id":..,"event_type":..}`; the callback is not part of any
/// wire form.
#[derive(Debug, Clone, Serialize)]
pub struct ScEvent {
    id: EventId,
    event_type: ScEventType,
    #[serde(skip)]
    callback: EventCallback,
}

impl ScEvent {
    /// Creates a subscription handle.
    #[must_use]
    pub const fn new(id: EventId, event_type: ScEventType, callback: EventCallback) -> Self {
        Self {
            id,
            event_type,
            callback,
        }
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the kind of change the subscription listens for.
    #[must_use]
    pub const fn event_type(&self) -> ScEventType {
        self.event_type
    }

    /// Returns the notification callback.
    #[must_use]
    pub const fn callback(&self) -> &EventCallback {
        &self.callback
    }
}
