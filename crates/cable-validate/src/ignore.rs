//! Membership sets parsed from comma-delimited configuration values.

use std::collections::HashSet;

/// Set of device or connector names read from a comma list.
///
/// Tokens are kept verbatim. An empty list therefore yields a set holding the
/// empty string, which matches records whose field is itself empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: HashSet<String>,
}

/// Names exempted from one rule.
pub type IgnoreSet = NameSet;

impl NameSet {
    pub fn parse(list: &str) -> Self {
        Self {
            names: list.split(',').map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True when any of the given fields is in the set.
    pub fn contains_any<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> bool {
        names.into_iter().any(|name| self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
