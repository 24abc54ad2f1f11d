//! Results of structural template search and generation.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::addr::ScAddr;

/// One satisfying assignment of a template's variables.
///
/// `addrs` holds the matched construction in template order. Aliases map a
/// variable name to an index into `addrs`; all results of one search share a
/// single alias table.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// use sc_client_types::{ScAddr, ScTemplateResult};
///
/// let aliases = Arc::new(BTreeMap::from([("x".to_owned(), 1)]));
/// let result = ScTemplateResult::new(vec![ScAddr::new(10), ScAddr::new(20)], aliases);
/// assert_eq!(result.get("x"), Some(ScAddr::new(20)));
/// assert_eq!(result.get("y"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScTemplateResult {
    addrs: Vec<ScAddr>,
    aliases: Arc<BTreeMap<String, usize>>,
}

impl ScTemplateResult {
    /// Creates a result from matched addresses and a shared alias table.
    #[must_use]
    pub const fn new(addrs: Vec<ScAddr>, aliases: Arc<BTreeMap<String, usize>>) -> Self {
        Self { addrs, aliases }
    }

    /// Resolves an alias to the address it is bound to.
    ///
    /// Returns `None` for unknown aliases and for aliases whose index falls
    /// outside the matched construction.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<ScAddr> {
        self.aliases
            .get(alias)
            .and_then(|index| self.get_index(*index))
    }

    /// Returns the address at a position in the matched construction.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<ScAddr> {
        self.addrs.get(index).copied()
    }

    /// Returns the matched addresses in template order.
    #[must_use]
    pub fn addrs(&self) -> &[ScAddr] {
        &self.addrs
    }

    /// Returns the alias table shared with sibling results.
    #[must_use]
    pub const fn aliases(&self) -> &Arc<BTreeMap<String, usize>> {
        &self.aliases
    }

    /// Iterates over the matched addresses.
    pub fn iter(&self) -> impl Iterator<Item = ScAddr> + '_ {
        self.addrs.iter().copied()
    }

    /// Returns the number of matched addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Returns `true` when the result binds no addresses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}
