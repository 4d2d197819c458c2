//! Badge payload builder
//!
//! Produces shields.io endpoint payloads for the percentage metrics
//! (coverage, mutation score) and the count metrics (static-analysis
//! issues, dependency vulnerabilities). The palette matches the darker CI
//! badge green rather than the shields default.

use crate::models::{BadgePayload, RawCoverage, RawDependencyScan, RawMutation};

const GREEN: &str = "16A34A";
const AMBER: &str = "F59E0B";
const ORANGE: &str = "EA580C";
const RED: &str = "DC2626";
const GRAY: &str = "9CA3AF";

/// Fixed badge set, as `(file name, payload)` pairs in write order.
///
/// Absent coverage/mutation reports produce a 0.0% badge; an unknown count
/// (scan never ran) produces the neutral `n/a` badge instead.
pub fn build_badges(
    coverage: Option<&RawCoverage>,
    mutation: Option<&RawMutation>,
    static_issues: Option<u64>,
    dependency: Option<&RawDependencyScan>,
) -> Vec<(&'static str, BadgePayload)> {
    let coverage_pct = coverage.map_or(0.0, |c| c.pct);
    let mutation_pct = mutation.map_or(0.0, |m| m.pct);
    let dependency_vulns = dependency.map(|d| d.vulnerabilities);

    vec![
        ("jacoco.json", percent_badge("JaCoCo", coverage_pct)),
        ("mutation.json", percent_badge("PITest", mutation_pct)),
        (
            "spotbugs.json",
            count_badge("SpotBugs", static_issues, "issues", "clean"),
        ),
        (
            "dependency.json",
            count_badge("OWASP DC", dependency_vulns, "vulns", "clean"),
        ),
    ]
}

/// Four-tier ramp for percentage metrics.
fn percent_color(pct: f64) -> &'static str {
    if pct >= 90.0 {
        GREEN
    } else if pct >= 75.0 {
        AMBER
    } else if pct >= 60.0 {
        ORANGE
    } else {
        RED
    }
}

pub fn percent_badge(label: &str, pct: f64) -> BadgePayload {
    let safe = pct.clamp(0.0, 100.0);
    BadgePayload {
        schema_version: 1,
        label: label.to_string(),
        message: format!("{:.1}%", safe),
        color: percent_color(safe).to_string(),
    }
}

/// Count badge: unknown → neutral gray, zero → clean green, small counts →
/// warning, larger → danger.
pub fn count_badge(
    label: &str,
    count: Option<u64>,
    unit: &str,
    clean_message: &str,
) -> BadgePayload {
    let (message, color) = match count {
        None => ("n/a".to_string(), GRAY),
        Some(0) => (clean_message.to_string(), GREEN),
        Some(n @ 1..=5) => (format!("{} {}", n, unit), AMBER),
        Some(n) => (format!("{} {}", n, unit), RED),
    };
    BadgePayload {
        schema_version: 1,
        label: label.to_string(),
        message,
        color: color.to_string(),
    }
}
