//! Dispatch from command context to decoder.

use sc_client_session::EventRegistry;
use sc_client_types::Response;
use tracing::debug;

use crate::context::CommandContext;
use crate::decoded::Decoded;
use crate::decoders;
use crate::error::DecodeError;

/// Tracing target for decoder dispatch.
const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Routes responses to the decoder of their originating command.
///
/// The processor borrows the event registry that the subscription decoders
/// update; every other decoder is pure. Dispatch is an exhaustive match, so
/// every command has exactly one decoder.
#[derive(Debug)]
pub struct ResponseProcessor<'r, R: ?Sized> {
    registry: &'r R,
}

impl<'r, R> ResponseProcessor<'r, R>
where
    R: EventRegistry + ?Sized,
{
    /// Creates a processor that records subscriptions in `registry`.
    #[must_use]
    pub const fn new(registry: &'r R) -> Self {
        Self { registry }
    }

    /// Returns the registry this processor updates.
    #[must_use]
    pub const fn registry(&self) -> &'r R {
        self.registry
    }

    /// Decodes `response` as the result of the command named by `context`.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] raised by the selected decoder when the
    /// payload breaks the command's wire contract.
    pub fn run(
        &self,
        context: CommandContext<'_>,
        response: &Response,
    ) -> Result<Decoded, DecodeError> {
        debug!(
            target: DISPATCH_TARGET,
            command = %context.command(),
            status = response.status(),
            "decoding response"
        );
        let decoded = match context {
            CommandContext::CreateElements => {
                Decoded::CreateElements(decoders::create_elements(response)?)
            }
            CommandContext::CheckElements => {
                Decoded::CheckElements(decoders::check_elements(response)?)
            }
            CommandContext::DeleteElements => {
                Decoded::DeleteElements(decoders::delete_elements(response))
            }
            CommandContext::Keynodes => Decoded::Keynodes(decoders::resolve_keynodes(response)?),
            CommandContext::GetLinkContent => {
                Decoded::GetLinkContent(decoders::get_link_content(response)?)
            }
            CommandContext::GetLinksByContent => {
                Decoded::GetLinksByContent(decoders::get_links_by_content(response)?)
            }
            CommandContext::SetLinkContents => {
                Decoded::SetLinkContents(decoders::set_link_contents(response))
            }
            CommandContext::EventsCreate(params) => {
                Decoded::EventsCreate(decoders::events_create(self.registry, response, params)?)
            }
            CommandContext::EventsDestroy(events) => {
                Decoded::EventsDestroy(decoders::events_destroy(self.registry, response, events))
            }
            CommandContext::GenerateTemplate => {
                Decoded::GenerateTemplate(decoders::generate_template(response)?)
            }
            CommandContext::SearchTemplate => {
                Decoded::SearchTemplate(decoders::search_template(response)?)
            }
        };
        Ok(decoded)
    }
}
