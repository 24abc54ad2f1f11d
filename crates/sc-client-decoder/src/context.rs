//! Request context paired with a response for decoding.

use sc_client_types::{ClientCommand, ScEvent, ScEventParams};

/// The command that produced a response, with any request data its decoder
/// needs.
///
/// Only the event commands need request data: subscription ids are matched
/// positionally against the submitted descriptors, and unsubscribe clears the
/// events that were sent. Carrying that data in the variant makes a command
/// without its context unrepresentable.
#[derive(Debug, Clone, Copy)]
pub enum CommandContext<'a> {
    /// `create_elements` request.
    CreateElements,
    /// `check_elements` request.
    CheckElements,
    /// `delete_elements` request.
    DeleteElements,
    /// `keynodes` request.
    Keynodes,
    /// `get_link_content` request.
    GetLinkContent,
    /// `get_links_by_content` request.
    GetLinksByContent,
    /// `set_link_contents` request.
    SetLinkContents,
    /// `events_create` request with the descriptors in submission order.
    EventsCreate(&'a [ScEventParams]),
    /// `events_destroy` request with the subscriptions being cancelled.
    EventsDestroy(&'a [ScEvent]),
    /// `generate_template` request.
    GenerateTemplate,
    /// `search_template` request.
    SearchTemplate,
}

impl CommandContext<'_> {
    /// Returns the command kind of this context.
    #[must_use]
    pub const fn command(&self) -> ClientCommand {
        match self {
            Self::CreateElements => ClientCommand::CreateElements,
            Self::CheckElements => ClientCommand::CheckElements,
            Self::DeleteElements => ClientCommand::DeleteElements,
            Self::Keynodes => ClientCommand::Keynodes,
            Self::GetLinkContent => ClientCommand::GetLinkContent,
            Self::GetLinksByContent => ClientCommand::GetLinksByContent,
            Self::SetLinkContents => ClientCommand::SetLinkContents,
            Self::EventsCreate(_) => ClientCommand::EventsCreate,
            Self::EventsDestroy(_) => ClientCommand::EventsDestroy,
            Self::GenerateTemplate => ClientCommand::GenerateTemplate,
            Self::SearchTemplate => ClientCommand::SearchTemplate,
        }
    }

    /// Builds the context for a command whose decoder needs no request data.
    ///
    /// Returns `None` for the event commands, which must be built with their
    /// descriptors.
    #[must_use]
    pub const fn stateless(command: ClientCommand) -> Option<Self> {
        match command {
            ClientCommand::CreateElements => Some(Self::CreateElements),
            ClientCommand::CheckElements => Some(Self::CheckElements),
            ClientCommand::DeleteElements => Some(Self::DeleteElements),
            ClientCommand::Keynodes => Some(Self::Keynodes),
            ClientCommand::GetLinkContent => Some(Self::GetLinkContent),
            ClientCommand::GetLinksByContent => Some(Self::GetLinksByContent),
            ClientCommand::SetLinkContents => Some(Self::SetLinkContents),
            ClientCommand::GenerateTemplate => Some(Self::GenerateTemplate),
            ClientCommand::SearchTemplate => Some(Self::SearchTemplate),
            ClientCommand::EventsCreate | ClientCommand::EventsDestroy => None,
        }
    }
}
