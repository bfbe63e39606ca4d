//! Diagnostic identities: the descriptor a formatter registers, and the
//! per-unit diagnostics an analysis pass reports.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Identifies one fixable rule.
///
/// Supplied by a formatter at registration and immutable thereafter. The
/// descriptor is what the key-resolution policy consumes; it carries no
/// per-unit state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDescriptor {
    /// Stable rule code, e.g. `SF0005`.
    pub rule_id: String,
    /// Category name used in category-scoped configuration keys.
    pub category: String,
    /// Minimum severity required to activate the fix when the caller does not
    /// supply a run-level threshold.
    pub activation_severity: Severity,
}

impl DiagnosticDescriptor {
    pub fn new(
        rule_id: impl Into<String>,
        category: impl Into<String>,
        activation_severity: Severity,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category: category.into(),
            activation_severity,
        }
    }
}

/// A flagged issue in one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub category: String,
    /// Zero-based line index of the offending text.
    pub line: usize,
}
