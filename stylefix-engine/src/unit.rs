use crate::analysis;
use camino::Utf8PathBuf;
use stylefix_types::Diagnostic;

/// One source file plus the diagnostics currently flagged in it.
///
/// Units are value objects: a rewrite produces a fresh unit with fresh
/// diagnostics, so later formatters never observe stale positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: Utf8PathBuf,
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl SourceUnit {
    pub fn new(path: Utf8PathBuf, text: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path,
            text,
            diagnostics,
        }
    }

    /// Build a unit and run the built-in analysis over its text.
    pub fn analyzed(path: Utf8PathBuf, text: String) -> Self {
        let diagnostics = analysis::scan(&text);
        Self::new(path, text, diagnostics)
    }

    /// Diagnostics flagged for one rule.
    pub fn diagnostics_for(&self, rule_id: &str) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule_id == rule_id)
    }
}
