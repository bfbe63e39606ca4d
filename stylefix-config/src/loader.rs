//! Flat editorconfig-style loader.
//!
//! Section headers and their glob semantics are not interpreted; every
//! `key = value` pair in the file lands in one flat store, later entries
//! winning. That matches the "already-parsed key/value configuration" shape
//! the decision engine consumes.

use crate::store::AnalyzerConfig;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use tracing::debug;

/// The severity configuration file stylefix looks for at the tree root.
pub const CONFIG_FILE_NAME: &str = ".editorconfig";

/// Parse flat `key = value` lines into a store.
///
/// Blank lines, `#`/`;` comment lines, and `[section]` headers are skipped.
/// Lines without `=` are ignored. Values are taken verbatim after trimming,
/// so a present key with an empty value stays present (and will fail severity
/// parsing, by design of the fail-closed decision path).
pub fn parse_flat_config(contents: &str) -> AnalyzerConfig {
    let mut entries = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        entries.push((key.trim().to_string(), value.trim().to_string()));
    }
    AnalyzerConfig::new(entries)
}

/// Load and parse the severity configuration file at `path`.
pub fn load_analyzer_config(path: &Utf8Path) -> anyhow::Result<AnalyzerConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read config {}", path))?;
    Ok(parse_flat_config(&contents))
}

/// Load the configuration from `root`, or return an empty store when no file
/// exists. An empty store means no fix is opted in: default-safe.
pub fn load_or_empty(root: &Utf8Path) -> anyhow::Result<AnalyzerConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        debug!(path = %path, "loading severity configuration");
        load_analyzer_config(&path)
    } else {
        debug!(path = %path, "no severity configuration found");
        Ok(AnalyzerConfig::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn parses_keys_and_skips_noise() {
        let config = parse_flat_config(
            "# top comment\n\
             root = true\n\
             \n\
             [*.cs]\n\
             stylefix_diagnostic.SF0005.severity = warning\n\
             ; another comment\n\
             stylefix_analyzer_diagnostic.severity = info\n\
             not a key value line\n",
        );
        assert_eq!(
            config.get("stylefix_diagnostic.SF0005.severity"),
            Some("warning")
        );
        assert_eq!(
            config.get("stylefix_analyzer_diagnostic.severity"),
            Some("info")
        );
        assert_eq!(config.get("root"), Some("true"));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn later_entries_win() {
        let config = parse_flat_config(
            "stylefix_analyzer_diagnostic.severity = info\n\
             stylefix_analyzer_diagnostic.severity = error\n",
        );
        assert_eq!(
            config.get("stylefix_analyzer_diagnostic.severity"),
            Some("error")
        );
    }

    #[test]
    fn empty_value_stays_present() {
        let config = parse_flat_config("stylefix_diagnostic.SF0005.severity =\n");
        assert_eq!(config.get("stylefix_diagnostic.SF0005.severity"), Some(""));
    }

    #[test]
    fn load_or_empty_without_file_is_empty() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let config = load_or_empty(&root).expect("load");
        assert!(config.is_empty());
    }

    #[test]
    fn load_or_empty_reads_existing_file() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        std::fs::write(
            root.join(CONFIG_FILE_NAME),
            "stylefix_diagnostic.SF0005.severity = error\n",
        )
        .expect("write config");

        let config = load_or_empty(&root).expect("load");
        assert_eq!(
            config.get("stylefix_diagnostic.SF0005.severity"),
            Some("error")
        );
    }
}
