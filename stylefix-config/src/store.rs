use std::collections::BTreeMap;
use stylefix_types::{Severity, SeverityParseError};
use thiserror::Error;

/// A configuration key was present but its value did not parse.
///
/// Absence is never an error; only a malformed present value fails, and it
/// fails loudly rather than silently defaulting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid severity for `{key}`: {source}")]
    InvalidSeverity {
        key: String,
        #[source]
        source: SeverityParseError,
    },
}

/// Immutable mapping from configuration key to raw string value.
///
/// Built once per invocation and read-only thereafter; safely shared across
/// concurrent evaluations. Lookups are case-sensitive exact-key matches;
/// any wildcard or precedence logic lives in the key resolution policy, not
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    entries: BTreeMap<String, String>,
}

impl AnalyzerConfig {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw lookup. Absent keys yield `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Typed lookup: parse the raw value into a [`Severity`].
    ///
    /// Fails only when the key is present but unparsable.
    pub fn get_severity(&self, key: &str) -> Result<Option<Severity>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<Severity>()
                .map(Some)
                .map_err(|source| ConfigError::InvalidSeverity {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
