//! Payload access shared by the decoders.

use sc_client_types::{ClientCommand, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::error::DecodeError;

/// Returns the payload, failing when it is absent or `null`.
pub(super) fn require(command: ClientCommand, response: &Response) -> Result<&Value, DecodeError> {
    present(response).ok_or(DecodeError::missing_payload(command))
}

/// Deserialises a payload into the shape a command defines.
pub(super) fn parse<'a, T>(command: ClientCommand, value: &'a Value) -> Result<T, DecodeError>
where
    T: Deserialize<'a>,
{
    T::deserialize(value).map_err(|error| DecodeError::from_json_error(command, error))
}

/// Returns the payload unless it is absent or `null`.
pub(super) fn present(response: &Response) -> Option<&Value> {
    response.payload().filter(|value| !value.is_null())
}
