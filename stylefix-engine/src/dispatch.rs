//! Per-unit dispatch over the registered formatters.

use crate::decision::{FixRequest, decide};
use crate::formatter::{Formatter, Rewrite};
use crate::unit::SourceUnit;
use stylefix_config::{AnalyzerConfig, ConfigError};
use thiserror::Error;
use tracing::debug;

/// A per-unit dispatch failure. Isolated to the unit it occurred in; other
/// units keep processing.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("formatter `{formatter}` failed to rewrite")]
    Rewrite {
        formatter: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// What dispatch did to one unit.
#[derive(Debug)]
pub struct UnitOutcome {
    /// The unit after all approved rewrites, re-analyzed.
    pub unit: SourceUnit,
    pub changed: bool,
    /// Names of formatters whose rewrite changed the unit, in dispatch
    /// order, paired with the severity that approved each one.
    pub applied: Vec<AppliedFormatter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFormatter {
    pub formatter: &'static str,
    pub rule_id: Option<String>,
    pub effective_severity: Option<stylefix_types::Severity>,
}

/// Run every approved formatter over one unit, in declared order.
///
/// Approved formatters run sequentially, never concurrently, because later
/// formatters may observe positions invalidated by earlier rewrites; the
/// unit is re-analyzed after each change for the same reason. Decision
/// evaluation itself is pure and holds no resources.
pub fn format_unit(
    unit: SourceUnit,
    request: &FixRequest,
    config: &AnalyzerConfig,
    formatters: &[Box<dyn Formatter>],
) -> Result<UnitOutcome, DispatchError> {
    let mut unit = unit;
    let mut changed = false;
    let mut applied = Vec::new();

    for formatter in formatters {
        let decision = decide(formatter.as_ref(), request, config)?;
        if !decision.apply {
            debug!(
                formatter = formatter.name(),
                reason = ?decision.reason,
                "skipping formatter"
            );
            continue;
        }

        let rewrite = formatter
            .format(&unit)
            .map_err(|source| DispatchError::Rewrite {
                formatter: formatter.name(),
                source,
            })?;

        if let Rewrite::Changed(text) = rewrite {
            changed = true;
            applied.push(AppliedFormatter {
                formatter: formatter.name(),
                rule_id: formatter.descriptor().map(|d| d.rule_id.clone()),
                effective_severity: decision.effective_severity,
            });
            unit = SourceUnit::analyzed(unit.path, text);
        }
    }

    Ok(UnitOutcome {
        unit,
        changed,
        applied,
    })
}
