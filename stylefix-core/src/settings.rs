//! Clap-free settings for the fix pipeline.

use camino::Utf8PathBuf;
use stylefix_types::{FixCategories, FixCategory, Severity};

/// Settings for one fix run.
#[derive(Debug, Clone)]
pub struct FixSettings {
    /// Root of the tree being formatted; severity configuration is loaded
    /// from here.
    pub repo_root: Utf8PathBuf,

    /// Glob patterns (relative to `repo_root`) selecting the units to check.
    pub include: Vec<String>,

    // Request
    pub categories: FixCategories,
    pub code_style_severity: Option<Severity>,

    /// Dry run: report and render the patch, write nothing.
    pub check: bool,

    /// Where to write `report.json` and `patch.diff`, when requested.
    pub report_dir: Option<Utf8PathBuf>,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            repo_root: Utf8PathBuf::from("."),
            include: vec!["**/*.cs".to_string()],
            categories: FixCategory::Whitespace | FixCategory::CodeStyle,
            code_style_severity: None,
            check: false,
            report_dir: None,
        }
    }
}
