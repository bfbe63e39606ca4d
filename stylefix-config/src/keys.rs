//! The hierarchical key naming convention and its resolution order.

use stylefix_types::DiagnosticDescriptor;

/// Prefix for rule-scoped overrides: `stylefix_diagnostic.<RULE>.severity`.
pub const DIAGNOSTIC_PREFIX: &str = "stylefix_diagnostic";

/// Prefix shared by category-scoped and global analyzer keys.
pub const ANALYZER_DIAGNOSTIC_PREFIX: &str = "stylefix_analyzer_diagnostic";

/// Segment marking a category-scoped key:
/// `stylefix_analyzer_diagnostic.category-<CATEGORY>.severity`.
pub const CATEGORY_PREFIX: &str = "category";

/// Suffix every severity key ends with.
pub const SEVERITY_SUFFIX: &str = "severity";

/// The one fixed, category-agnostic key shared by every diagnostic-driven
/// formatter.
pub const ANALYZER_DIAGNOSTIC_SEVERITY_KEY: &str = "stylefix_analyzer_diagnostic.severity";

/// Rule-specific severity key for `rule_id`.
pub fn rule_severity_key(rule_id: &str) -> String {
    format!("{DIAGNOSTIC_PREFIX}.{rule_id}.{SEVERITY_SUFFIX}")
}

/// Category-specific severity key for `category`.
pub fn category_severity_key(category: &str) -> String {
    format!("{ANALYZER_DIAGNOSTIC_PREFIX}.{CATEGORY_PREFIX}-{category}.{SEVERITY_SUFFIX}")
}

/// Ordered candidate keys for one descriptor, most specific first.
///
/// A single rule's configured severity overrides its category's, which
/// overrides the global default. Pure function; independently testable from
/// the store.
pub fn severity_keys(descriptor: &DiagnosticDescriptor) -> [String; 3] {
    [
        rule_severity_key(&descriptor.rule_id),
        category_severity_key(&descriptor.category),
        ANALYZER_DIAGNOSTIC_SEVERITY_KEY.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stylefix_types::Severity;

    #[test]
    fn keys_follow_the_naming_convention() {
        assert_eq!(
            rule_severity_key("SF0005"),
            "stylefix_diagnostic.SF0005.severity"
        );
        assert_eq!(
            category_severity_key("Style"),
            "stylefix_analyzer_diagnostic.category-Style.severity"
        );
    }

    #[test]
    fn resolution_order_is_rule_then_category_then_global() {
        let descriptor = DiagnosticDescriptor::new("SF0005", "Style", Severity::Info);
        let keys = severity_keys(&descriptor);
        assert_eq!(
            keys,
            [
                "stylefix_diagnostic.SF0005.severity".to_string(),
                "stylefix_analyzer_diagnostic.category-Style.severity".to_string(),
                "stylefix_analyzer_diagnostic.severity".to_string(),
            ]
        );
    }
}
