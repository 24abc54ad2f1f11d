//! Decoders for link content reads, searches, and writes.

use sc_client_types::{
    ClientCommand, Response, ScAddr, ScLinkContent, ScLinkContentType, ScLinkValue,
};
use serde::Deserialize;
use tracing::{debug, warn};

use super::DECODE_TARGET;
use super::payload::{parse, present, require};
use crate::error::DecodeError;

/// One entry of a `get_link_content` payload.
#[derive(Debug, Deserialize)]
struct LinkEntry {
    #[serde(rename = "type")]
    tag: String,
    value: ScLinkValue,
}

/// Decodes the content of a single link.
///
/// Only the first payload entry is read. Its `type` tag is matched exactly
/// against the known content tags; an unrecognised tag decodes to
/// [`ScLinkContentType::Undefined`] rather than failing. The value is passed
/// through as sent.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] when the envelope has no payload
/// and [`DecodeError::MalformedPayload`] when the payload is not a non-empty
/// list whose first entry carries `type` and `value`.
pub fn get_link_content(response: &Response) -> Result<ScLinkContent, DecodeError> {
    let command = ClientCommand::GetLinkContent;
    let payload = require(command, response)?;
    let items = payload
        .as_array()
        .ok_or_else(|| DecodeError::malformed(command, "payload is not a list"))?;
    let first = items
        .first()
        .ok_or_else(|| DecodeError::malformed(command, "payload list is empty"))?;
    let entry: LinkEntry = parse(command, first)?;

    let content_type = ScLinkContentType::from_wire_tag(&entry.tag);
    if content_type == ScLinkContentType::Undefined {
        warn!(
            target: DECODE_TARGET,
            tag = entry.tag.as_str(),
            "unknown link content tag, decoding as undefined"
        );
    }
    Ok(ScLinkContent::new(entry.value, content_type))
}

/// Decodes the links found for each searched content value.
///
/// An absent or `null` payload yields `None`; an empty list yields `Some` of
/// an empty vector. Each inner list holds the links matching one searched
/// value.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedPayload`] when a present payload is not a
/// list of address lists.
pub fn get_links_by_content(response: &Response) -> Result<Option<Vec<Vec<ScAddr>>>, DecodeError> {
    let command = ClientCommand::GetLinksByContent;
    let Some(payload) = present(response) else {
        debug!(target: DECODE_TARGET, %command, "response carries no links");
        return Ok(None);
    };
    parse(command, payload).map(Some)
}

/// Returns the status of a link content update.
#[must_use]
pub const fn set_link_contents(response: &Response) -> bool {
    response.status()
}
