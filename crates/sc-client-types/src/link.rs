//! Typed link content.

use serde::{Deserialize, Serialize};

/// Kind of value stored in a link.
///
/// The wire protocol tags content with a string; [`Self::from_wire_tag`]
/// maps it onto this closed set. Tags the client does not know map to
/// [`Self::Undefined`] so newer servers do not break older clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ScLinkContentType {
    /// The server reported a content tag this client does not recognise.
    #[default]
    Undefined = 0,
    /// Signed integer content.
    Int = 1,
    /// Floating point content.
    Float = 2,
    /// Text content.
    String = 3,
    /// Binary content, transported as text.
    Binary = 4,
}

impl ScLinkContentType {
    /// Maps a wire tag onto a content type.
    ///
    /// Matching is exact; any unrecognised tag yields [`Self::Undefined`].
    ///
    /// # Example
    ///
    /// ```
    /// use sc_client_types::ScLinkContentType;
    ///
    /// assert_eq!(ScLinkContentType::from_wire_tag("int"), ScLinkContentType::Int);
    /// assert_eq!(ScLinkContentType::from_wire_tag("Int"), ScLinkContentType::Undefined);
    /// ```
    #[must_use]
    pub fn from_wire_tag(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "int" => Self::Int,
            "binary" => Self::Binary,
            "float" => Self::Float,
            _ => Self::Undefined,
        }
    }

    /// Returns the wire tag, or `None` for [`Self::Undefined`].
    #[must_use]
    pub const fn wire_tag(self) -> Option<&'static str> {
        match self {
            Self::Undefined => None,
            Self::Int => Some("int"),
            Self::Float => Some("float"),
            Self::String => Some("string"),
            Self::Binary => Some("binary"),
        }
    }

    /// Returns the numeric code of the content type.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Raw value carried by a link, passed through as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScLinkValue {
    /// Integral JSON number within the `i64` range.
    Int(i64),
    /// Integral JSON number above `i64::MAX`.
    UInt(u64),
    /// Non-integral JSON number.
    Float(f64),
    /// JSON string; used for both text and binary content.
    Text(String),
}

impl ScLinkValue {
    /// Returns the value as text when it was sent as a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => None,
        }
    }
}

impl From<&str> for ScLinkValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for ScLinkValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for ScLinkValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<f64> for ScLinkValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Content read from a link element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScLinkContent {
    value: ScLinkValue,
    content_type: ScLinkContentType,
}

impl ScLinkContent {
    /// Pairs a value with its content type.
    #[must_use]
    pub const fn new(value: ScLinkValue, content_type: ScLinkContentType) -> Self {
        Self {
            value,
            content_type,
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> &ScLinkValue {
        &self.value
    }

    /// Returns the content type.
    #[must_use]
    pub const fn content_type(&self) -> ScLinkContentType {
        self.content_type
    }

    /// Consumes the content, returning the raw value.
    #[must_use]
    pub fn into_value(self) -> ScLinkValue {
        self.value
    }
}
