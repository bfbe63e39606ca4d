//! The fix pipeline, extracted from the CLI.
//!
//! The entry point is I/O-agnostic: discovery and persistence go through
//! the port traits, and every unit is processed in isolation so one bad
//! unit never blocks the rest of the run.

use crate::ports::{SourceDiscovery, WritePort};
use crate::settings::FixSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::Utc;
use diffy::PatchFormatter;
use sha2::{Digest, Sha256};
use stylefix_config::load_or_empty;
use stylefix_engine::{FixRequest, SourceUnit, builtin_formatters, format_unit};
use stylefix_types::report::{
    AppliedFix, FileReport, FileStatus, FormatReport, ReportCounts, ReportRunInfo, ReportStatus,
    ReportToolInfo, ReportVerdict,
};
use stylefix_types::schema;
use tracing::{debug, info};

/// Outcome of `run_fix`.
pub struct FixOutcome {
    pub report: FormatReport,
    /// Concatenated unified diff of every changed unit.
    pub patch: String,
    pub changed_files: u64,
    pub failed_files: u64,
}

impl FixOutcome {
    /// True when a check-mode run found work to do.
    pub fn changes_needed(&self) -> bool {
        self.changed_files > 0
    }
}

/// Run the fix pipeline over every discovered unit.
///
/// In check mode nothing is written; otherwise changed units are persisted
/// through `writer`. The severity configuration is loaded once from the
/// repo root and shared read-only across all units.
pub fn run_fix(
    settings: &FixSettings,
    sources: &dyn SourceDiscovery,
    writer: &dyn WritePort,
) -> anyhow::Result<FixOutcome> {
    let started = Utc::now();

    let config = load_or_empty(&settings.repo_root).context("load severity configuration")?;
    let mut request = FixRequest::new(settings.categories);
    if let Some(severity) = settings.code_style_severity {
        request = request.with_code_style_severity(severity);
    }

    let formatters = builtin_formatters();
    let loaded = sources.discover().context("discover source units")?;
    info!(units = loaded.len(), check = settings.check, "running fix pipeline");

    let mut files = Vec::new();
    let mut patch = String::new();
    let mut changed_files = 0u64;
    let mut failed_files = 0u64;
    let mut fixes_applied = 0u64;

    for source in loaded {
        let text = match source.contents {
            Ok(text) => text,
            Err(e) => {
                failed_files += 1;
                files.push(failed_file(source.path.as_str(), e.to_string()));
                continue;
            }
        };

        let sha_before = sha256_hex(text.as_bytes());
        let unit = SourceUnit::analyzed(source.path.clone(), text.clone());

        let outcome = match format_unit(unit, &request, &config, &formatters) {
            Ok(outcome) => outcome,
            Err(e) => {
                // Isolated: a bad configuration value or rewrite failure
                // fails this unit loudly and leaves the others alone.
                failed_files += 1;
                files.push(failed_file(
                    source.path.as_str(),
                    format!("{:#}", anyhow::Error::from(e)),
                ));
                continue;
            }
        };

        if !outcome.changed {
            debug!(path = %source.path, "unchanged");
            files.push(FileReport {
                path: source.path.to_string(),
                status: FileStatus::Unchanged,
                fixes: vec![],
                failure: None,
                sha256_before: Some(sha_before),
                sha256_after: None,
            });
            continue;
        }

        changed_files += 1;
        fixes_applied += outcome.applied.len() as u64;
        patch.push_str(&render_patch(&source.path, &text, &outcome.unit.text));

        if !settings.check {
            writer.write_file(&source.path, outcome.unit.text.as_bytes())?;
        }

        files.push(FileReport {
            path: source.path.to_string(),
            status: FileStatus::Changed,
            fixes: outcome
                .applied
                .into_iter()
                .map(|a| AppliedFix {
                    formatter: a.formatter.to_string(),
                    rule_id: a.rule_id,
                    effective_severity: a.effective_severity,
                })
                .collect(),
            failure: None,
            sha256_before: Some(sha_before),
            sha256_after: Some(sha256_hex(outcome.unit.text.as_bytes())),
        });
    }

    let status = if failed_files > 0 {
        ReportStatus::Fail
    } else if settings.check && changed_files > 0 {
        ReportStatus::Warn
    } else {
        ReportStatus::Pass
    };

    let ended = Utc::now();
    let report = FormatReport {
        schema: schema::STYLEFIX_REPORT_V1.to_string(),
        tool: ReportToolInfo {
            name: "stylefix".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: ReportRunInfo {
            started_at: started.to_rfc3339(),
            ended_at: Some(ended.to_rfc3339()),
            duration_ms: Some((ended - started).num_milliseconds().max(0) as u64),
        },
        verdict: ReportVerdict {
            status,
            counts: ReportCounts {
                files_checked: files.len() as u64,
                files_changed: changed_files,
                files_failed: failed_files,
                fixes_applied,
            },
        },
        files,
    };

    Ok(FixOutcome {
        report,
        patch,
        changed_files,
        failed_files,
    })
}

/// Write all fix artifacts to the output directory.
pub fn write_fix_artifacts(
    outcome: &FixOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let report_json =
        serde_json::to_string_pretty(&outcome.report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), report_json.as_bytes())?;
    writer.write_file(&out_dir.join("patch.diff"), outcome.patch.as_bytes())?;

    Ok(())
}

fn failed_file(path: &str, failure: String) -> FileReport {
    FileReport {
        path: path.to_string(),
        status: FileStatus::Failed,
        fixes: vec![],
        failure: Some(failure),
        sha256_before: None,
        sha256_after: None,
    }
}

fn render_patch(path: &Utf8Path, old: &str, new: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let formatter = PatchFormatter::new();
    let patch = diffy::create_patch(old, new);
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
