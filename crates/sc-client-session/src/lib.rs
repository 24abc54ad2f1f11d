//! Session-side bookkeeping for sc-server event subscriptions.
//!
//! The session owns the process-wide table of live subscriptions. The
//! response decoders register a subscription once the server acknowledges an
//! `events_create` request and drop it when an `events_destroy` request is
//! answered. Server-pushed notifications are routed through the same table to
//! find the callback for the event id they carry.
//!
//! The table is exposed as the [`EventRegistry`] capability so decoders can
//! be handed any implementation by reference; [`SessionEvents`] is the
//! mutex-backed implementation used by the client, and
//! [`SessionEvents::global`] returns the shared process-wide instance.

pub mod error;
pub mod notify;
pub mod registry;

pub use self::error::SessionError;
pub use self::notify::deliver_notification;
pub use self::registry::{EventRegistry, SessionEvents};
