//! The fix decision engine.
//!
//! One pure evaluation per (formatter, request) pair: category gate first,
//! then severity resolution by first-present-key precedence, then an
//! inclusive threshold comparison.

use crate::formatter::Formatter;
use stylefix_config::{AnalyzerConfig, ConfigError, severity_keys};
use stylefix_types::{DecisionReason, FixCategories, FixDecision, Severity};
use tracing::debug;

/// What the caller asked this run to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixRequest {
    /// Categories of fix requested for this run.
    pub categories: FixCategories,
    /// Run-level required severity for code-style fixes. When absent, each
    /// formatter's declared activation severity applies.
    pub code_style_severity: Option<Severity>,
}

impl FixRequest {
    pub fn new(categories: FixCategories) -> Self {
        Self {
            categories,
            code_style_severity: None,
        }
    }

    #[must_use]
    pub fn with_code_style_severity(mut self, severity: Severity) -> Self {
        self.code_style_severity = Some(severity);
        self
    }
}

/// Decide whether one formatter's fix must be applied.
///
/// The category gate is evaluated strictly before any severity lookup: a
/// formatter configured at a qualifying severity is still skipped when its
/// category was not requested. Formatters without a diagnostic descriptor are
/// approved by category membership alone. For descriptor-carrying formatters
/// the candidate keys are probed most specific first; the first present,
/// parseable value is the effective severity. No present key means skip
/// (no configured opt-in, no change). A present-but-unparsable value is an
/// error, surfaced rather than swallowed.
pub fn decide(
    formatter: &dyn Formatter,
    request: &FixRequest,
    config: &AnalyzerConfig,
) -> Result<FixDecision, ConfigError> {
    if !request.categories.contains(formatter.category()) {
        return Ok(FixDecision::skip(None, DecisionReason::CategoryNotRequested));
    }

    let Some(descriptor) = formatter.descriptor() else {
        return Ok(FixDecision::apply(None, DecisionReason::CategoryRequested));
    };

    let mut effective = None;
    for key in severity_keys(descriptor) {
        if let Some(severity) = config.get_severity(&key)? {
            debug!(formatter = formatter.name(), %key, %severity, "resolved effective severity");
            effective = Some(severity);
            break;
        }
    }

    let Some(effective) = effective else {
        return Ok(FixDecision::skip(None, DecisionReason::NotConfigured));
    };

    let required = request
        .code_style_severity
        .unwrap_or(descriptor.activation_severity);

    if effective.meets_threshold(required) {
        Ok(FixDecision::apply(
            Some(effective),
            DecisionReason::MeetsThreshold,
        ))
    } else {
        Ok(FixDecision::skip(
            Some(effective),
            DecisionReason::BelowThreshold,
        ))
    }
}
