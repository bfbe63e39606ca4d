mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use config::CliFixArgs;
use std::process::ExitCode;
use stylefix_core::adapters::{FsSourceDiscovery, FsWritePort};
use stylefix_core::{run_fix, write_fix_artifacts};
use stylefix_engine::builtin_formatters;
use stylefix_types::{FixCategory, Severity};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "stylefix",
    version,
    about = "Severity-gated formatting and code-style fixes for source trees."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the fix pipeline over the repository.
    Fix(FixArgs),
    /// List all available formatters with their categories and gating.
    ListFormatters(ListFormattersArgs),
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Repository root (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Glob patterns (relative to repo root) selecting the units to check.
    #[arg(long)]
    include: Vec<String>,

    /// Fix categories to run (default: all).
    #[arg(long, value_enum)]
    category: Vec<CategoryArg>,

    /// Threshold for diagnostic-gated fixes (none, info, warning, error).
    #[arg(long)]
    code_style_severity: Option<Severity>,

    /// Report what would change without writing anything.
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Directory to write report.json and patch.diff into.
    #[arg(long)]
    report: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListFormattersArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CategoryArg {
    Whitespace,
    CodeStyle,
}

impl From<CategoryArg> for FixCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Whitespace => FixCategory::Whitespace,
            CategoryArg::CodeStyle => FixCategory::CodeStyle,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fix(args) => cmd_fix(args),
        Command::ListFormatters(args) => cmd_list_formatters(args),
    }
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<ExitCode> {
    let file_config = config::load_or_default(&args.repo_root).context("load stylefix.toml")?;
    let cli_args = CliFixArgs {
        repo_root: args.repo_root,
        include: args.include,
        categories: args.category.into_iter().map(FixCategory::from).collect(),
        code_style_severity: args.code_style_severity,
        check: args.check,
        report_dir: args.report,
    };
    let settings = config::resolve_settings(&cli_args, &file_config);

    let discovery =
        FsSourceDiscovery::new(settings.repo_root.clone(), settings.include.clone());
    let writer = FsWritePort;

    let outcome = run_fix(&settings, &discovery, &writer).context("run fix pipeline")?;

    if let Some(report_dir) = &settings.report_dir {
        write_fix_artifacts(&outcome, report_dir, &writer).context("write fix artifacts")?;
        info!("wrote artifacts to {}", report_dir);
    }

    if settings.check && !outcome.patch.is_empty() {
        print!("{}", outcome.patch);
    }

    let counts = &outcome.report.verdict.counts;
    info!(
        files_checked = counts.files_checked,
        files_changed = counts.files_changed,
        files_failed = counts.files_failed,
        fixes_applied = counts.fixes_applied,
        "fix run complete"
    );

    for file in &outcome.report.files {
        if let Some(failure) = &file.failure {
            error!(path = %file.path, "{}", failure);
        }
    }

    if outcome.failed_files > 0 {
        return Ok(ExitCode::from(1));
    }
    if settings.check && outcome.changes_needed() {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::from(0))
}

fn cmd_list_formatters(args: ListFormattersArgs) -> anyhow::Result<ExitCode> {
    let formatters = builtin_formatters();

    match args.format {
        OutputFormat::Text => {
            println!("Available formatters, in dispatch order:\n");
            println!("  {:<24} {:<12} GATING", "NAME", "CATEGORY");
            println!("  {:<24} {:<12} ------", "----", "--------");
            for formatter in &formatters {
                let gating = match formatter.descriptor() {
                    Some(d) => format!(
                        "{} (activates at {})",
                        d.rule_id, d.activation_severity
                    ),
                    None => "category only".to_string(),
                };
                println!(
                    "  {:<24} {:<12} {}",
                    formatter.name(),
                    formatter.category(),
                    gating
                );
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = formatters
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name(),
                        "category": f.category().as_str(),
                        "rule_id": f.descriptor().map(|d| d.rule_id.clone()),
                        "activation_severity": f
                            .descriptor()
                            .map(|d| d.activation_severity.as_str()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(ExitCode::from(0))
}
