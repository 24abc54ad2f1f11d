use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    #[default]
    Json,
    /// Single-line human-readable output.
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::json("json", LogFormat::Json)]
    #[case::upper("COMPACT", LogFormat::Compact)]
    fn parses_case_insensitively(#[case] text: &str, #[case] expected: LogFormat) {
        assert_eq!(LogFormat::from_str(text).expect("known format"), expected);
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(LogFormat::Compact.to_string(), "compact");
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(LogFormat::from_str("pretty").is_err());
    }
}
