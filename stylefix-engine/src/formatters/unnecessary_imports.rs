use crate::analysis::{STYLE_CATEGORY, UNNECESSARY_IMPORT_RULE_ID};
use crate::formatter::{Formatter, Rewrite};
use crate::unit::SourceUnit;
use std::collections::BTreeSet;
use stylefix_types::{DiagnosticDescriptor, FixCategory, Severity};
use tracing::debug;

/// Removes import directives flagged by the unnecessary-import diagnostic.
///
/// Severity-gated: only runs when configuration opts the SF0005 rule (or its
/// category, or the global analyzer key) in at a qualifying severity.
pub struct UnnecessaryImportsFormatter {
    descriptor: DiagnosticDescriptor,
}

impl UnnecessaryImportsFormatter {
    pub fn new() -> Self {
        Self {
            descriptor: DiagnosticDescriptor::new(
                UNNECESSARY_IMPORT_RULE_ID,
                STYLE_CATEGORY,
                Severity::Info,
            ),
        }
    }
}

impl Default for UnnecessaryImportsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for UnnecessaryImportsFormatter {
    fn name(&self) -> &'static str {
        "unnecessary_imports"
    }

    fn category(&self) -> FixCategory {
        FixCategory::CodeStyle
    }

    fn descriptor(&self) -> Option<&DiagnosticDescriptor> {
        Some(&self.descriptor)
    }

    fn format(&self, unit: &SourceUnit) -> anyhow::Result<Rewrite> {
        let flagged: BTreeSet<usize> = unit
            .diagnostics_for(UNNECESSARY_IMPORT_RULE_ID)
            .map(|d| d.line)
            .collect();
        if flagged.is_empty() {
            return Ok(Rewrite::Unchanged);
        }

        debug!(path = %unit.path, removed = flagged.len(), "removing unnecessary imports");

        let had_final_newline = unit.text.ends_with('\n');
        let mut lines: Vec<&str> = unit
            .text
            .lines()
            .enumerate()
            .filter(|(index, _)| !flagged.contains(index))
            .map(|(_, line)| line)
            .collect();

        // Removing the import header should not leave a blank banner.
        while lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }

        let mut fixed = lines.join("\n");
        if had_final_newline && !fixed.is_empty() {
            fixed.push('\n');
        }

        if fixed == unit.text {
            Ok(Rewrite::Unchanged)
        } else {
            Ok(Rewrite::Changed(fixed))
        }
    }
}
