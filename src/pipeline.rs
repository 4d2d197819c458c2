//! Aggregation pipeline
//!
//! Fixed-order orchestration: run every loader (none can fail the run),
//! render the summary, assemble the metrics envelope, and hand everything
//! to the output sinks. Absence of a report is a recorded fact, never an
//! error, so the run always completes once the sinks are writable.

use std::path::Path;

use anyhow::Result;

use crate::config::{ReportPaths, RunConfig};
use crate::loaders::{
    DependencyCheckLoader, JacocoLoader, PitestLoader, ReportLoader, SpotBugsLoader,
    SurefireLoader,
};
use crate::metrics::{
    normalize_coverage, normalize_dependency, normalize_mutation, normalize_tests,
};
use crate::models::{
    MetricsEnvelope, RawCoverage, RawDependencyScan, RawMutation, RawTestRun, RunMetadata,
};
use crate::reporters::{badges, console, summary, timeline};
use crate::sinks;

/// Run the whole aggregation against the project at `root`.
pub fn run(root: &Path, config: &RunConfig) -> Result<()> {
    let paths = ReportPaths::new(root);

    let tests = load_logged(&SurefireLoader, &paths);
    let coverage = load_logged(&JacocoLoader, &paths);
    let mutation = load_logged(&PitestLoader, &paths);
    let dependency = load_logged(&DependencyCheckLoader, &paths);
    let static_issues = load_logged(&SpotBugsLoader, &paths);

    let summary_text = summary::build_summary(
        config,
        tests.as_ref(),
        coverage.as_ref(),
        mutation.as_ref(),
        dependency.as_ref(),
    );
    sinks::append_summary(config.step_summary.as_deref(), &summary_text)?;

    let envelope = build_envelope(
        config,
        tests.as_ref(),
        coverage.as_ref(),
        mutation.as_ref(),
        dependency.as_ref(),
        timestamp_now(),
    );
    sinks::write_dashboard(&paths, &envelope)?;

    if config.update_badges {
        let badge_set = badges::build_badges(
            coverage.as_ref(),
            mutation.as_ref(),
            static_issues,
            dependency.as_ref(),
        );
        sinks::write_badges(paths.badge_dir(config), &badge_set);
    }

    Ok(())
}

fn load_logged<L: ReportLoader>(loader: &L, paths: &ReportPaths) -> Option<L::Report> {
    let report = loader.load(paths);
    if report.is_none() {
        tracing::debug!("{}: no report data", loader.name());
    }
    report
}

/// Assemble the consolidated metrics document from the loaded reports.
///
/// The timestamp is passed in so callers comparing envelopes across runs
/// can control the only field that varies on unchanged inputs.
pub fn build_envelope(
    config: &RunConfig,
    tests: Option<&RawTestRun>,
    coverage: Option<&RawCoverage>,
    mutation: Option<&RawMutation>,
    dependency: Option<&RawDependencyScan>,
    timestamp: String,
) -> MetricsEnvelope {
    let tests = normalize_tests(tests);
    let coverage = normalize_coverage(coverage);
    let mutation = normalize_mutation(mutation);
    let dependency_check = normalize_dependency(dependency);

    let console = console::build_console_lines(&tests, &coverage, &mutation, &dependency_check);
    let timeline = timeline::build_timeline(&dependency_check);

    MetricsEnvelope {
        run: RunMetadata {
            repo: config.repository().to_string(),
            workflow: config.workflow().to_string(),
            os: config.metadata_os().to_string(),
            jdk: config.metadata_java().to_string(),
            branch: config.branch().to_string(),
            commit: config.short_commit(),
            author: config.author().to_string(),
            timestamp,
        },
        tests,
        coverage,
        mutation,
        dependency_check,
        timeline,
        console,
    }
}

fn timestamp_now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
