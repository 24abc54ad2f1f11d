//! Command kinds understood by the sc-server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocol operation that produced a response envelope.
///
/// The set is closed: adding a server operation means adding a variant here
/// and a decoder in `sc-client-decoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCommand {
    /// Create nodes, links, and connectors.
    CreateElements,
    /// Report the type code of each given address.
    CheckElements,
    /// Delete elements by address.
    DeleteElements,
    /// Resolve system identifiers to keynode addresses.
    Keynodes,
    /// Read the content of a link.
    GetLinkContent,
    /// Find links whose content matches each given value.
    GetLinksByContent,
    /// Replace the content of links.
    SetLinkContents,
    /// Subscribe to element events.
    EventsCreate,
    /// Cancel event subscriptions.
    EventsDestroy,
    /// Generate the constructions described by a template.
    GenerateTemplate,
    /// Search for constructions matching a template.
    SearchTemplate,
}

impl ClientCommand {
    /// Every command kind, in protocol declaration order.
    pub const ALL: [Self; 11] = [
        Self::CreateElements,
        Self::CheckElements,
        Self::DeleteElements,
        Self::Keynodes,
        Self::GetLinkContent,
        Self::GetLinksByContent,
        Self::SetLinkContents,
        Self::EventsCreate,
        Self::EventsDestroy,
        Self::GenerateTemplate,
        Self::SearchTemplate,
    ];

    /// Returns the wire name of the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateElements => "create_elements",
            Self::CheckElements => "check_elements",
            Self::DeleteElements => "delete_elements",
            Self::Keynodes => "keynodes",
            Self::GetLinkContent => "get_link_content",
            Self::GetLinksByContent => "get_links_by_content",
            Self::SetLinkContents => "set_link_contents",
            Self::EventsCreate => "events_create",
            Self::EventsDestroy => "events_destroy",
            Self::GenerateTemplate => "generate_template",
            Self::SearchTemplate => "search_template",
        }
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {command}")]
pub struct ParseCommandError {
    /// The rejected input.
    pub command: String,
}

impl FromStr for ClientCommand {
    type Err = ParseCommandError;

    /// Parses a wire name, ignoring ASCII case and accepting `-` for `_`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == normalised)
            .ok_or_else(|| ParseCommandError {
                command: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn wire_names_match_serde_names() {
        for command in ClientCommand::ALL {
            let json = serde_json::to_string(&command).expect("serialise");
            assert_eq!(json, format!("\"{}\"", command.as_str()));
        }
    }

    #[rstest]
    #[case::exact("search_template", ClientCommand::SearchTemplate)]
    #[case::kebab("events-create", ClientCommand::EventsCreate)]
    #[case::upper("KEYNODES", ClientCommand::Keynodes)]
    #[case::padded(" get_link_content ", ClientCommand::GetLinkContent)]
    fn parses_command_names(#[case] input: &str, #[case] expected: ClientCommand) {
        assert_eq!(input.parse::<ClientCommand>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_command() {
        let error = "teleport".parse::<ClientCommand>().expect_err("unknown");
        assert_eq!(error.command, "teleport");
        assert!(error.to_string().contains("teleport"));
    }
}
