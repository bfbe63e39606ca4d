use crate::formatters;
use crate::unit::SourceUnit;
use stylefix_types::{DiagnosticDescriptor, FixCategory};

/// Result of one formatter pass over one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Unchanged,
    Changed(String),
}

/// A unit of rewrite logic.
///
/// Each formatter declares one category and, for diagnostic-gated fixes, one
/// descriptor. Rewrites must be idempotent: applying a formatter to its own
/// output yields `Unchanged`, so a check pass can re-verify a fixed tree.
pub trait Formatter {
    fn name(&self) -> &'static str;

    fn category(&self) -> FixCategory;

    /// The diagnostic this formatter fixes, when it is severity-gated.
    /// Formatters returning `None` are gated by category membership only.
    fn descriptor(&self) -> Option<&DiagnosticDescriptor> {
        None
    }

    fn format(&self, unit: &SourceUnit) -> anyhow::Result<Rewrite>;
}

/// All built-in formatters, in dispatch order.
///
/// The order is fixed and declared here: whitespace rewrites run before
/// code-style rewrites. Formatters may touch overlapping text, so the order
/// is part of the contract, not an implementation detail.
pub fn builtin_formatters() -> Vec<Box<dyn Formatter>> {
    vec![
        Box::new(formatters::WhitespaceFormatter),
        Box::new(formatters::UnnecessaryImportsFormatter::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_puts_whitespace_first() {
        let formatters = builtin_formatters();
        let names: Vec<&str> = formatters.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["whitespace", "unnecessary_imports"]);
    }

    #[test]
    fn builtin_categories_and_descriptors() {
        let formatters = builtin_formatters();
        assert_eq!(formatters[0].category(), FixCategory::Whitespace);
        assert!(formatters[0].descriptor().is_none());
        assert_eq!(formatters[1].category(), FixCategory::CodeStyle);
        assert_eq!(
            formatters[1].descriptor().map(|d| d.rule_id.as_str()),
            Some("SF0005")
        );
    }
}
