//! Entry names skipped during a walk

use std::collections::BTreeMap;
use std::ffi::OsStr;

use serde::Serialize;

/// Mapping from an entry base name to a human-readable label.
///
/// Only the keys matter to the walker; labels are descriptive. The default set
/// holds the two directory aliases `.` and `..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Exclusions(BTreeMap<String, String>);

impl Exclusions {
    /// An exclusion set that skips nothing.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Check if entries with this base name are skipped.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Check a raw entry name. Names that are not valid UTF-8 never match,
    /// since every key is a `String`.
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.contains(name))
    }

    /// Add a name, returning the previous label if it was already present.
    pub fn insert(&mut self, name: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), label.into())
    }

    pub fn label(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        [(".", "current folder"), ("..", "parent folder")]
            .into_iter()
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Exclusions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
