//! Configuration file loading for stylefix.
//!
//! Discovers and loads `stylefix.toml` from the repository root and merges
//! it with CLI arguments (CLI takes precedence). Severity gating itself is
//! configured elsewhere, in the analyzer configuration file; this file only
//! carries run settings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use stylefix_core::FixSettings;
use stylefix_types::{FixCategories, FixCategory, Severity};
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "stylefix.toml";

/// Top-level configuration from stylefix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylefixConfig {
    pub fix: FixConfig,
}

/// The `[fix]` section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Glob patterns selecting the units to check, relative to the repo root.
    pub include: Vec<String>,

    /// Categories to run. Empty means all categories.
    pub categories: Vec<FixCategory>,

    /// Threshold override for diagnostic-gated fixes.
    pub code_style_severity: Option<Severity>,

    /// Report changes without writing them.
    pub check: bool,
}

/// Discover the stylefix.toml config file.
///
/// Returns `None` if no config file is found in the repository root.
pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a stylefix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<StylefixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<StylefixConfig> {
    let config: StylefixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from repo root, or return default if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<StylefixConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(StylefixConfig::default()),
    }
}

/// CLI-side inputs to the merge, already parsed by clap.
#[derive(Debug, Clone, Default)]
pub struct CliFixArgs {
    pub repo_root: Utf8PathBuf,
    pub include: Vec<String>,
    pub categories: Vec<FixCategory>,
    pub code_style_severity: Option<Severity>,
    pub check: bool,
    pub report_dir: Option<Utf8PathBuf>,
}

/// Merge the config file with CLI arguments into pipeline settings.
///
/// CLI values take precedence; config file values fill the gaps; the
/// built-in defaults cover the rest. An empty category list on both sides
/// means every category.
pub fn resolve_settings(cli: &CliFixArgs, config: &StylefixConfig) -> FixSettings {
    let defaults = FixSettings::default();

    let include = if !cli.include.is_empty() {
        cli.include.clone()
    } else if !config.fix.include.is_empty() {
        config.fix.include.clone()
    } else {
        defaults.include
    };

    let categories: FixCategories = if !cli.categories.is_empty() {
        cli.categories.iter().copied().collect()
    } else if !config.fix.categories.is_empty() {
        config.fix.categories.iter().copied().collect()
    } else {
        defaults.categories
    };

    FixSettings {
        repo_root: cli.repo_root.clone(),
        include,
        categories,
        code_style_severity: cli.code_style_severity.or(config.fix.code_style_severity),
        check: cli.check || config.fix.check,
        report_dir: cli.report_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn parse_example_config() {
        let contents = r#"
[fix]
include = ["src/**/*.cs", "tests/**/*.cs"]
categories = ["whitespace", "code_style"]
code_style_severity = "warning"
check = true
"#;

        let config = parse_config(contents).unwrap();
        assert_eq!(config.fix.include.len(), 2);
        assert_eq!(
            config.fix.categories,
            vec![FixCategory::Whitespace, FixCategory::CodeStyle]
        );
        assert_eq!(config.fix.code_style_severity, Some(Severity::Warning));
        assert!(config.fix.check);
    }

    #[test]
    fn parse_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.fix.include.is_empty());
        assert!(config.fix.categories.is_empty());
        assert_eq!(config.fix.code_style_severity, None);
        assert!(!config.fix.check);
    }

    #[test]
    fn cli_include_overrides_config() {
        let config = parse_config("[fix]\ninclude = [\"config/**/*.cs\"]\n").unwrap();
        let cli = CliFixArgs {
            repo_root: Utf8PathBuf::from("."),
            include: vec!["cli/**/*.cs".to_string()],
            ..Default::default()
        };

        let settings = resolve_settings(&cli, &config);
        assert_eq!(settings.include, vec!["cli/**/*.cs".to_string()]);
    }

    #[test]
    fn config_fills_gaps_left_by_cli() {
        let config = parse_config(
            "[fix]\ninclude = [\"config/**/*.cs\"]\ncode_style_severity = \"error\"\n",
        )
        .unwrap();
        let cli = CliFixArgs {
            repo_root: Utf8PathBuf::from("."),
            ..Default::default()
        };

        let settings = resolve_settings(&cli, &config);
        assert_eq!(settings.include, vec!["config/**/*.cs".to_string()]);
        assert_eq!(settings.code_style_severity, Some(Severity::Error));
    }

    #[test]
    fn empty_categories_mean_all() {
        let cli = CliFixArgs {
            repo_root: Utf8PathBuf::from("."),
            ..Default::default()
        };
        let settings = resolve_settings(&cli, &StylefixConfig::default());
        assert!(settings.categories.contains(FixCategory::Whitespace));
        assert!(settings.categories.contains(FixCategory::CodeStyle));
    }

    #[test]
    fn check_is_or_combined() {
        let config = parse_config("[fix]\ncheck = true\n").unwrap();
        let cli = CliFixArgs {
            repo_root: Utf8PathBuf::from("."),
            ..Default::default()
        };
        assert!(resolve_settings(&cli, &config).check);
        assert!(!resolve_settings(&cli, &StylefixConfig::default()).check);
    }

    #[test]
    fn discover_config_some_and_none() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        assert!(discover_config(&root).is_none());

        std::fs::write(root.join(CONFIG_FILE_NAME), "").expect("write config");
        assert!(discover_config(&root).is_some());
    }

    #[test]
    fn load_or_default_returns_default_when_missing() {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
        let cfg = load_or_default(&root).expect("load default");
        assert!(cfg.fix.include.is_empty());
        assert!(!cfg.fix.check);
    }
}
