//! Per-command decoders.
//!
//! Each function turns a [`Response`] into the typed result of one command.
//! Callers that know the command statically may use these directly; the
//! [`ResponseProcessor`](crate::ResponseProcessor) selects among them from a
//! [`CommandContext`](crate::CommandContext).
//!
//! [`Response`]: sc_client_types::Response

mod elements;
mod events;
mod link;
mod payload;
mod template;

pub use self::elements::{check_elements, create_elements, delete_elements, resolve_keynodes};
pub use self::events::{events_create, events_destroy};
pub use self::link::{get_link_content, get_links_by_content, set_link_contents};
pub use self::template::{generate_template, search_template};

/// Tracing target for payload decoding.
pub(crate) const DECODE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::decode");
