//! CLI definition and entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::RunConfig;
use crate::pipeline;

/// qadash - QA report aggregation
///
/// Reads the QA report artifacts a build pipeline leaves under `target/`
/// and renders them as a job summary, badge payloads, and dashboard
/// metrics. Missing reports are recorded, never fatal.
#[derive(Parser, Debug)]
#[command(name = "qadash")]
#[command(
    version,
    about = "Aggregate build-pipeline QA reports into summaries, badges, and dashboard metrics",
    after_help = "\
Examples:
  qadash                               Summarize reports under ./target
  qadash /path/to/project              Summarize another project's build output
  UPDATE_BADGES=true qadash            Also write badge JSON files
  GITHUB_STEP_SUMMARY=sum.md qadash    Append the summary instead of printing

Recognized environment: MATRIX_OS, MATRIX_JAVA, GITHUB_STEP_SUMMARY,
UPDATE_BADGES, BADGE_OUTPUT_DIR, GITHUB_REPOSITORY, GITHUB_WORKFLOW,
GITHUB_REF_NAME, GITHUB_SHA, GITHUB_ACTOR."
)]
pub struct Cli {
    /// Path to the project root containing the build output directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_env();
    pipeline::run(&cli.path, &config)
}
