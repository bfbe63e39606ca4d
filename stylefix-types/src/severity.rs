//! The severity scale used for every threshold comparison in stylefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An entry on the configured severity scale.
///
/// The derived `Ord` is load-bearing: `None < Info < Warning < Error` is the
/// order every threshold comparison uses. `silent` and `info` are historically
/// distinct spellings for the same rank and both parse to [`Severity::Info`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    #[serde(alias = "silent")]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// All levels, in ascending rank order.
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Inclusive threshold check: `actual >= required`.
    ///
    /// `Severity::None` never meets any threshold; a diagnostic configured to
    /// `none` must not trigger a fix even against a `none` requirement.
    pub fn meets_threshold(self, required: Severity) -> bool {
        self != Severity::None && self >= required
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw configuration value did not parse to a recognized severity token.
///
/// Callers decide fallback policy; parsing never silently defaults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized severity value `{value}`")]
pub struct SeverityParseError {
    pub value: String,
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "none" => Ok(Severity::None),
            "silent" | "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(SeverityParseError {
                value: raw.to_string(),
            }),
        }
    }
}
