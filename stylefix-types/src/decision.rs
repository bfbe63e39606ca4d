//! The result of evaluating one (formatter, request) pair.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Why a decision came out the way it did.
///
/// Carried alongside the boolean so callers can report *why* a fix did or did
/// not run without re-deriving the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// The formatter's category was not in the requested set.
    CategoryNotRequested,
    /// The formatter has no diagnostic descriptor; category membership alone
    /// approves it.
    CategoryRequested,
    /// No candidate configuration key was present. Default-safe skip.
    NotConfigured,
    /// A severity was resolved but ranked below the required threshold.
    BelowThreshold,
    /// The resolved severity met the required threshold.
    MeetsThreshold,
}

/// Outcome of one fix decision. Created fresh per evaluation; never cached
/// across runs because configuration can differ per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixDecision {
    pub apply: bool,
    /// The severity that governed the decision, when one was resolved from
    /// configuration. `None` for category-only gates and unconfigured skips.
    pub effective_severity: Option<Severity>,
    pub reason: DecisionReason,
}

impl FixDecision {
    pub fn apply(effective_severity: Option<Severity>, reason: DecisionReason) -> Self {
        Self {
            apply: true,
            effective_severity,
            reason,
        }
    }

    pub fn skip(effective_severity: Option<Severity>, reason: DecisionReason) -> Self {
        Self {
            apply: false,
            effective_severity,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_apply_flag() {
        let yes = FixDecision::apply(Some(Severity::Warning), DecisionReason::MeetsThreshold);
        assert!(yes.apply);
        assert_eq!(yes.effective_severity, Some(Severity::Warning));

        let no = FixDecision::skip(None, DecisionReason::NotConfigured);
        assert!(!no.apply);
        assert_eq!(no.effective_severity, None);
    }

    #[test]
    fn reason_serializes_as_snake_case() {
        let json = serde_json::to_string(&DecisionReason::CategoryNotRequested).unwrap();
        assert_eq!(json, "\"category_not_requested\"");
    }
}
