//! Pipeline timeline builder
//!
//! A fixed ordered sequence of stage descriptors for the dashboard. The
//! durations are nominal annotations rather than measurements; the only
//! data-driven part is the Dependency-Check stage flipping to `warn` when
//! the scan found any vulnerable dependency.

use crate::models::{DependencyMetrics, TimelineStage};

const STAGES: [(&str, u64, &str); 7] = [
    ("Checkout", 6, "CK"),
    ("Build", 18, "BLD"),
    ("Tests", 3, "TST"),
    ("SpotBugs", 4, "BUG"),
    ("Dependency-Check", 22, "DC"),
    ("PITest", 45, "PIT"),
    ("Artifacts", 5, "ART"),
];

pub fn build_timeline(dependency: &DependencyMetrics) -> Vec<TimelineStage> {
    STAGES
        .iter()
        .map(|&(stage, duration, short)| {
            let status = if stage == "Dependency-Check" && dependency.vulnerable_deps > 0 {
                "warn"
            } else {
                "pass"
            };
            TimelineStage {
                stage: stage.to_string(),
                duration,
                status: status.to_string(),
                short: short.to_string(),
            }
        })
        .collect()
}
