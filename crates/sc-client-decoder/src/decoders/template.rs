//! Decoders for structural template search and generation.

use std::collections::BTreeMap;
use std::sync::Arc;

use sc_client_types::{ClientCommand, Response, ScAddr, ScTemplateResult};
use serde::Deserialize;
use tracing::debug;

use super::DECODE_TARGET;
use super::payload::{parse, require};
use crate::error::DecodeError;

/// Template payload; `A` is one address list for generation and a list of
/// them for search.
#[derive(Debug, Deserialize)]
struct TemplatePayload<A> {
    aliases: BTreeMap<String, usize>,
    addrs: A,
}

/// Decodes every construction matching a searched template.
///
/// A `false` status yields an empty vector without reading the payload. All
/// results share one alias table.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] or
/// [`DecodeError::MalformedPayload`] when the status is `true` but the
/// payload is absent or lacks `aliases` and `addrs`.
pub fn search_template(response: &Response) -> Result<Vec<ScTemplateResult>, DecodeError> {
    let command = ClientCommand::SearchTemplate;
    if !response.status() {
        debug!(target: DECODE_TARGET, %command, "template search failed on the server");
        return Ok(Vec::new());
    }
    let TemplatePayload { aliases, addrs } =
        parse::<TemplatePayload<Vec<Vec<ScAddr>>>>(command, require(command, response)?)?;
    let aliases = Arc::new(aliases);
    Ok(addrs
        .into_iter()
        .map(|construction| ScTemplateResult::new(construction, Arc::clone(&aliases)))
        .collect())
}

/// Decodes the construction produced by a template generation.
///
/// A `false` status yields `None` without reading the payload.
///
/// # Errors
///
/// Returns [`DecodeError::MissingPayload`] or
/// [`DecodeError::MalformedPayload`] when the status is `true` but the
/// payload is absent or lacks `aliases` and `addrs`.
pub fn generate_template(response: &Response) -> Result<Option<ScTemplateResult>, DecodeError> {
    let command = ClientCommand::GenerateTemplate;
    if !response.status() {
        debug!(target: DECODE_TARGET, %command, "template generation failed on the server");
        return Ok(None);
    }
    let TemplatePayload { aliases, addrs } =
        parse::<TemplatePayload<Vec<ScAddr>>>(command, require(command, response)?)?;
    Ok(Some(ScTemplateResult::new(addrs, Arc::new(aliases))))
}
