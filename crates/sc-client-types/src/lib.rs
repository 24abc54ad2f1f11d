//! Value types shared by the sc-server client crates.
//!
//! The sc-server speaks a JSON command/response protocol. Every response is a
//! generic [`Response`] envelope whose payload shape depends on the
//! [`ClientCommand`] that produced it. This crate holds the envelope itself
//! plus the strongly typed values the decoders turn payloads into:
//!
//! - [`ScAddr`] and [`ScType`] - opaque element addresses and type codes
//! - [`ScLinkContent`] - typed content attached to a link element
//! - [`ScTemplateResult`] - one variable binding of a structural template
//! - [`ScEvent`] and [`ScEventParams`] - event subscriptions and the
//!   descriptors submitted to create them
//!
//! The types carry no I/O and no session state; the registry that owns live
//! subscriptions lives in `sc-client-session`.

mod addr;
mod command;
mod event;
mod link;
mod response;
mod template;

pub use self::addr::{ScAddr, ScType};
pub use self::command::{ClientCommand, ParseCommandError};
pub use self::event::{EventCallback, EventId, ScEvent, ScEventParams, ScEventType};
pub use self::link::{ScLinkContent, ScLinkContentType, ScLinkValue};
pub use self::response::{EnvelopeError, Response};
pub use self::template::ScTemplateResult;
