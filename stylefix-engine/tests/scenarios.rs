//! End-to-end decision + dispatch scenarios for the unnecessary-imports fix.
//!
//! Each scenario drives the real builtin formatters through `format_unit`
//! with a hand-built severity store, mirroring how the pipeline invokes the
//! engine per unit.

use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use stylefix_config::{
    ANALYZER_DIAGNOSTIC_SEVERITY_KEY, AnalyzerConfig, category_severity_key, rule_severity_key,
};
use stylefix_engine::{FixRequest, SourceUnit, builtin_formatters, format_unit};
use stylefix_types::{FixCategory, Severity};

const CODE: &str = "using System;\n\nclass C {}";

fn run(code: &str, request: FixRequest, config: AnalyzerConfig) -> String {
    let unit = SourceUnit::analyzed(Utf8PathBuf::from("C.cs"), code.to_string());
    let outcome = format_unit(unit, &request, &config, &builtin_formatters()).expect("dispatch");
    outcome.unit.text
}

#[test]
fn whitespace_only_request_never_touches_imports() {
    let request = FixRequest::new(FixCategory::Whitespace.into())
        .with_code_style_severity(Severity::Info);
    assert_eq!(run(CODE, request, AnalyzerConfig::empty()), CODE);
}

#[test]
fn unconfigured_rule_means_no_change() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Info);
    assert_eq!(run(CODE, request, AnalyzerConfig::empty()), CODE);
}

#[test]
fn severity_below_threshold_means_no_change() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Error);
    let config = AnalyzerConfig::new([(rule_severity_key("SF0005"), "warning")]);
    assert_eq!(run(CODE, request, config), CODE);
}

#[test]
fn severity_at_threshold_removes_the_import() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Warning);
    let config = AnalyzerConfig::new([(rule_severity_key("SF0005"), "warning")]);
    assert_eq!(run(CODE, request, config), "class C {}");
}

#[test]
fn category_key_is_the_fallback_when_rule_key_is_absent() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Warning);
    let config = AnalyzerConfig::new([(category_severity_key("Style"), "error")]);
    assert_eq!(run(CODE, request, config), "class C {}");
}

#[test]
fn global_key_gates_every_style_fix() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Warning);

    let qualifying = AnalyzerConfig::new([(ANALYZER_DIAGNOSTIC_SEVERITY_KEY, "error")]);
    assert_eq!(run(CODE, request, qualifying), "class C {}");

    let below = AnalyzerConfig::new([(ANALYZER_DIAGNOSTIC_SEVERITY_KEY, "info")]);
    assert_eq!(run(CODE, request, below), CODE);
}

#[test]
fn rule_key_overrides_broader_keys_exclusively() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Warning);

    // Category and global say error; rule-specific none must win and block.
    let config = AnalyzerConfig::new([
        (rule_severity_key("SF0005"), "none".to_string()),
        (category_severity_key("Style"), "error".to_string()),
        (ANALYZER_DIAGNOSTIC_SEVERITY_KEY.to_string(), "error".to_string()),
    ]);
    assert_eq!(run(CODE, request, config), CODE);
}

#[test]
fn silent_and_info_are_the_same_rank() {
    let request = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Info);

    for token in ["silent", "info"] {
        let config = AnalyzerConfig::new([(rule_severity_key("SF0005"), token)]);
        assert_eq!(run(CODE, request, config), "class C {}");
    }
}

#[test]
fn empty_store_is_default_safe_for_every_request() {
    let everything = FixRequest::new(FixCategory::Whitespace | FixCategory::CodeStyle)
        .with_code_style_severity(Severity::Info);
    let nothing = FixRequest::new(stylefix_types::FixCategories::EMPTY);

    for request in [everything, nothing] {
        assert_eq!(run(CODE, request, AnalyzerConfig::empty()), CODE);
    }
}
