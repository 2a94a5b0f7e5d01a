//! Immutable string-keyed configuration source.

use std::{
    collections::{HashMap, hash_map},
    fs,
    path::Path,
};

use tracing::debug;

use crate::error::PropertiesError;

/// Raw configuration: string keys mapped to string values.
///
/// A store is built once and never mutated afterwards. Absent keys and
/// present-but-empty values are both treated as unset during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    /// Raw entries.
    entries: HashMap<String, String>,
}

impl ConfigStore {
    /// Empty store; every setting resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `defaults`, with `overrides` taking precedence.
    pub fn merged(defaults: &Self, overrides: &Self) -> Self {
        let mut entries = defaults.entries.clone();
        entries.extend(
            overrides
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Self { entries }
    }

    /// Parse a properties source: `key=value` or `key: value` per line.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. Keys and
    /// values are trimmed.
    pub fn parse_properties(source: &str) -> Result<Self, PropertiesError> {
        let mut entries = HashMap::new();
        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                return Err(PropertiesError::Parse {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            let (key, value) = (&line[..split], &line[split + 1..]);
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        debug!(entries = entries.len(), "parsed properties");
        Ok(Self { entries })
    }

    /// Read and parse a properties file.
    pub fn load_properties(path: &Path) -> Result<Self, PropertiesError> {
        let source = fs::read_to_string(path).map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_properties(&source)
    }

    /// Raw value for `key`, if present. Empty values are returned as `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<HashMap<String, String>> for ConfigStore {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for ConfigStore {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
