//! Decoders for element creation, inspection, and keynode resolution.

use sc_client_types::{ClientCommand, Response, ScAddr, ScType};
use tracing::debug;

use super::DECODE_TARGET;
use super::payload::{parse, present, require};
use crate::error::DecodeError;

/// Decodes the addresses of newly created elements.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] when the envelope has no payload
/// and [`DecodeError::MalformedPayload`] when it is not a list of addresses.
pub fn create_elements(response: &Response) -> Result<Vec<ScAddr>, DecodeError> {
    let command = ClientCommand::CreateElements;
    parse(command, require(command, response)?)
}

/// Decodes the type codes reported for the checked elements.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] when the envelope has no payload
/// and [`DecodeError::MalformedPayload`] when it is not a list of type codes.
pub fn check_elements(response: &Response) -> Result<Vec<ScType>, DecodeError> {
    let command = ClientCommand::CheckElements;
    parse(command, require(command, response)?)
}

/// Returns the status of an element deletion.
#[must_use]
pub const fn delete_elements(response: &Response) -> bool {
    response.status()
}

/// Decodes the addresses resolved for the requested keynodes.
///
/// An absent or `null` payload yields `None`. An empty list yields
/// `Some` of an empty vector, so callers can tell the two apart.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedPayload`] when a present payload is not a
/// list of addresses.
pub fn resolve_keynodes(response: &Response) -> Result<Option<Vec<ScAddr>>, DecodeError> {
    let command = ClientCommand::Keynodes;
    let Some(payload) = present(response) else {
        debug!(target: DECODE_TARGET, %command, "response carries no keynodes");
        return Ok(None);
    };
    parse(command, payload).map(Some)
}
