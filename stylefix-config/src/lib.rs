//! Severity configuration for stylefix.
//!
//! stylefix consumes an editorconfig-style flat key/value file. This crate
//! owns the immutable store built from it, the hierarchical key naming
//! convention, and the rule > category > global resolution order. It
//! intentionally does not implement editorconfig section/glob semantics; the
//! loader flattens what it reads and the store answers exact-key lookups only.

mod keys;
mod loader;
mod store;

pub use keys::{
    ANALYZER_DIAGNOSTIC_PREFIX, ANALYZER_DIAGNOSTIC_SEVERITY_KEY, CATEGORY_PREFIX,
    DIAGNOSTIC_PREFIX, SEVERITY_SUFFIX, category_severity_key, rule_severity_key, severity_keys,
};
pub use loader::{CONFIG_FILE_NAME, load_analyzer_config, load_or_empty, parse_flat_config};
pub use store::{AnalyzerConfig, ConfigError};
