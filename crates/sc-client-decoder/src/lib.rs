//! Response decoding for the sc-server client.
//!
//! The server answers every command with the same [`Response`] envelope: a
//! status flag and a payload whose shape depends on the command. This crate
//! turns that envelope into the typed result promised for the command that
//! produced it.
//!
//! # Architecture
//!
//! - [`CommandContext`] names the originating command. The event commands
//!   carry the descriptors submitted with the request, so a command can never
//!   be paired with the wrong request context.
//! - [`ResponseProcessor`] matches exhaustively on the context and runs the
//!   decoder for that command, returning a [`Decoded`] value.
//! - [`decoders`] exposes one typed function per command for callers that
//!   know the command statically.
//!
//! Decoding is synchronous and performs no I/O. The only side effects are
//! the registrations made by the event decoders against the
//! [`EventRegistry`] the processor borrows.
//!
//! # Example
//!
//! ```
//! use sc_client_decoder::{CommandContext, Decoded, ResponseProcessor};
//! use sc_client_session::SessionEvents;
//! use sc_client_types::{Response, ScAddr};
//! use serde_json::json;
//!
//! let events = SessionEvents::new();
//! let processor = ResponseProcessor::new(&events);
//! let response = Response::success(json!([4711, 4712]));
//!
//! let decoded = processor
//!     .run(CommandContext::CreateElements, &response)
//!     .expect("payload is a list of addresses");
//! assert!(matches!(
//!     decoded,
//!     Decoded::CreateElements(addrs) if addrs == vec![ScAddr::new(4711), ScAddr::new(4712)]
//! ));
//! ```
//!
//! [`Response`]: sc_client_types::Response
//! [`EventRegistry`]: sc_client_session::EventRegistry

mod context;
mod decoded;
pub mod decoders;
mod error;
mod processor;

#[cfg(test)]
mod tests;

pub use self::context::CommandContext;
pub use self::decoded::Decoded;
pub use self::error::DecodeError;
pub use self::processor::ResponseProcessor;
