//! Typed results produced by the response processor.

use sc_client_types::{ClientCommand, ScAddr, ScEvent, ScLinkContent, ScTemplateResult, ScType};
use serde::Serialize;

/// Decoded result of a response, one variant per command.
///
/// Serialises as `{"command":"<wire name>","result":<value>}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", content = "result", rename_all = "snake_case")]
pub enum Decoded {
    /// Addresses of the created elements, in request order.
    CreateElements(Vec<ScAddr>),
    /// Type codes of the checked elements, in request order.
    CheckElements(Vec<ScType>),
    /// Server status of the deletion.
    DeleteElements(bool),
    /// Resolved keynode addresses; `None` when the server sent no payload.
    Keynodes(Option<Vec<ScAddr>>),
    /// Content of the requested link.
    GetLinkContent(ScLinkContent),
    /// Matching links per searched value; `None` when the server sent no
    /// payload.
    GetLinksByContent(Option<Vec<Vec<ScAddr>>>),
    /// Server status of the content update.
    SetLinkContents(bool),
    /// Registered subscriptions, in submission order.
    EventsCreate(Vec<ScEvent>),
    /// Server status of the unsubscribe request.
    EventsDestroy(bool),
    /// Generated construction; `None` when generation failed.
    GenerateTemplate(Option<ScTemplateResult>),
    /// Every construction matching the template.
    SearchTemplate(Vec<ScTemplateResult>),
}

impl Decoded {
    /// Returns the command that produced this result.
    #[must_use]
    pub const fn command(&self) -> ClientCommand {
        match self {
            Self::CreateElements(_) => ClientCommand::CreateElements,
            Self::CheckElements(_) => ClientCommand::CheckElements,
            Self::DeleteElements(_) => ClientCommand::DeleteElements,
            Self::Keynodes(_) => ClientCommand::Keynodes,
            Self::GetLinkContent(_) => ClientCommand::GetLinkContent,
            Self::GetLinksByContent(_) => ClientCommand::GetLinksByContent,
            Self::SetLinkContents(_) => ClientCommand::SetLinkContents,
            Self::EventsCreate(_) => ClientCommand::EventsCreate,
            Self::EventsDestroy(_) => ClientCommand::EventsDestroy,
            Self::GenerateTemplate(_) => ClientCommand::GenerateTemplate,
            Self::SearchTemplate(_) => ClientCommand::SearchTemplate,
        }
    }

    /// Returns the status for commands whose result is a status flag.
    #[must_use]
    pub const fn status(&self) -> Option<bool> {
        match self {
            Self::DeleteElements(status)
            | Self::SetLinkContents(status)
            | Self::EventsDestroy(status) => Some(*status),
            Self::CreateElements(_)
            | Self::CheckElements(_)
            | Self::Keynodes(_)
            | Self::GetLinkContent(_)
            | Self::GetLinksByContent(_)
            | Self::EventsCreate(_)
            | Self::GenerateTemplate(_)
            | Self::SearchTemplate(_) => None,
        }
    }
}
