//! Markdown summary table builder
//!
//! One row per metric category. Percentage rows carry a 20-character
//! proportional bar next to the number; categories whose source report was
//! absent render a sentinel (`_no data_` / `_not run_`) with an explanatory
//! detail instead of a zero — zero and absent must never look the same to a
//! human reader.

use crate::config::RunConfig;
use crate::models::{
    RawCoverage, RawDependencyScan, RawMutation, RawTestRun, Severity, SeverityCounts,
};

/// Width of the textual progress bar.
const BAR_WIDTH: usize = 20;

/// Render the full summary: header, table, and artifact-location footer.
/// Ends with a trailing newline so it can be appended to a running log.
pub fn build_summary(
    config: &RunConfig,
    tests: Option<&RawTestRun>,
    coverage: Option<&RawCoverage>,
    mutation: Option<&RawMutation>,
    dependency: Option<&RawDependencyScan>,
) -> String {
    let mut lines = vec![
        format!(
            "### QA Metrics ({}, JDK {})",
            config.header_os(),
            config.header_java()
        ),
        String::new(),
        "| Metric | Result | Details |".to_string(),
        "| --- | --- | --- |".to_string(),
    ];

    match tests {
        Some(t) => lines.push(format_row(
            "Tests",
            &format!("{} executed", t.tests),
            &format!(
                "Total runtime {}s; failures: {}, errors: {}, skipped: {}",
                format_seconds(t.time),
                t.failures,
                t.errors,
                t.skipped
            ),
        )),
        None => lines.push(format_row("Tests", "_no data_", "Surefire reports not found.")),
    }

    match coverage {
        Some(c) => lines.push(format_row(
            "Line coverage (JaCoCo)",
            &percent_cell(c.pct),
            &format!("{} / {} lines covered", c.covered, c.total),
        )),
        None => lines.push(format_row(
            "Line coverage (JaCoCo)",
            "_no data_",
            "Jacoco XML report missing.",
        )),
    }

    match mutation {
        Some(m) => lines.push(format_row(
            "Mutation score (PITest)",
            &percent_cell(m.pct),
            &format!(
                "{} killed, {} survived, {} detected out of {} mutations",
                m.killed, m.survived, m.detected, m.total
            ),
        )),
        None => lines.push(format_row(
            "Mutation score (PITest)",
            "_no data_",
            "PITest report not generated (likely skipped).",
        )),
    }

    match dependency {
        Some(d) => {
            lines.push(format_row(
                "Dependency-Check",
                "scan complete",
                &format!(
                    "{} dependencies with issues ({} vulnerabilities) out of {} scanned.",
                    d.vulnerable_dependencies, d.vulnerabilities, d.dependencies
                ),
            ));
            lines.push(format_row(
                "Dependency severity",
                &severity_summary(&d.severity),
                "",
            ));
        }
        None => lines.push(format_row(
            "Dependency-Check",
            "_not run_",
            "Report missing (probably skipped when `NVD_API_KEY` was not provided).",
        )),
    }

    lines.push(String::new());
    lines.push(
        "Interactive dashboard: `target/site/qa-dashboard/index.html` \
         (packaged in the `quality-reports-*` artifact)."
            .to_string(),
    );
    lines.push(
        "Artifacts: `target/site/`, `target/pit-reports/`, `target/dependency-check-report.*`."
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n") + "\n"
}

/// Proportionally filled bar, e.g. `██████████░░░░░░░░░░` for 50%.
pub fn bar(pct: f64) -> String {
    let filled = (pct / 100.0 * BAR_WIDTH as f64).round() as i64;
    let filled = filled.clamp(0, BAR_WIDTH as i64) as usize;
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}

fn format_row(metric: &str, value: &str, detail: &str) -> String {
    format!("| {} | {} | {} |", metric, value, detail)
}

/// Percent left-padded to 8 columns so the bars line up across rows.
fn percent_cell(pct: f64) -> String {
    format!("{:<8}{}", format!("{:.1}%", pct), bar(pct))
}

/// Seconds with at least one decimal, matching how runtimes appear in the
/// running log (`3.0s`, not `3s`).
fn format_seconds(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🟥 Critical",
        Severity::High => "🟧 High",
        Severity::Medium => "🟨 Medium",
        Severity::Low => "🟩 Low",
        Severity::Unknown => "⬜ Unknown",
    }
}

fn severity_summary(counts: &SeverityCounts) -> String {
    Severity::ORDER
        .iter()
        .map(|&level| format!("{}: {}", severity_label(level), counts.get(level)))
        .collect::<Vec<_>>()
        .join(" &nbsp; ")
}
