//! Element addresses and element type codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of a node or connector stored in the remote knowledge base.
///
/// Addresses are opaque to the client: they are produced by the server and
/// handed back to it verbatim. Equality is by the underlying numeric value.
///
/// # Example
///
/// ```
/// use sc_client_types::ScAddr;
///
/// let addr = ScAddr::new(42);
/// assert_eq!(addr.value(), 42);
/// assert!(addr.is_valid());
/// assert!(!ScAddr::EMPTY.is_valid());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ScAddr(u64);

impl ScAddr {
    /// The zero address, which never refers to a stored element.
    pub const EMPTY: Self = Self(0);

    /// Wraps a raw address value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw address value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` when the address is not the zero address.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for ScAddr {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScAddr({})", self.0)
    }
}

/// Type code classifying an element in the remote store.
///
/// The client does not interpret the bits; it only round-trips the codes the
/// server reports for `check_elements`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScType(u32);

impl ScType {
    /// The code reported for elements that do not exist.
    pub const UNKNOWN: Self = Self(0);

    /// Wraps a raw type code.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw type code.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for ScType {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScType({:#x})", self.0)
    }
}
