//! Console transcript builder
//!
//! Short log-style lines summarizing the normalized metrics, embedded in
//! the metrics envelope as a textual trace for the dashboard's console
//! panel. Not written to the terminal.

use crate::models::{CoverageMetrics, DependencyMetrics, MutationMetrics, TestMetrics};

pub fn build_console_lines(
    tests: &TestMetrics,
    coverage: &CoverageMetrics,
    mutation: &MutationMetrics,
    dependency: &DependencyMetrics,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);
    lines.push(format!(
        "[INFO] Tests: {}/{} passed (failures: {}, errors: {}, skipped: {})",
        tests.passed, tests.total, tests.failed, tests.errors, tests.skipped
    ));
    lines.push(format!(
        "[INFO] JaCoCo coverage: {:.1}% ({}/{})",
        coverage.percent, coverage.covered, coverage.total
    ));
    lines.push(format!(
        "[INFO] PITest mutation score: {:.1}% (killed {}, survived {}, detected {})",
        mutation.percent, mutation.killed, mutation.survived, mutation.detected
    ));
    let vuln_total = dependency.vulnerabilities.total();
    if dependency.vulnerable_deps > 0 {
        lines.push(format!(
            "[WARN] Dependency-Check: {} vulnerable deps ({} findings)",
            dependency.vulnerable_deps, vuln_total
        ));
    } else {
        lines.push("[INFO] Dependency-Check: 0 vulnerable dependencies detected".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityCounts;

    #[test]
    fn test_transcript_order_and_levels() {
        let tests = TestMetrics {
            total: 15,
            passed: 12,
            failed: 1,
            errors: 1,
            skipped: 1,
            duration: 4.5,
        };
        let coverage = CoverageMetrics {
            percent: 85.0,
            covered: 850,
            total: 1000,
        };
        let mutation = MutationMetrics {
            percent: 70.0,
            killed: 7,
            survived: 2,
            no_coverage: 1,
            detected: 7,
            total: 10,
        };
        let dependency = DependencyMetrics::default();

        let lines = build_console_lines(&tests, &coverage, &mutation, &dependency);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "[INFO] Tests: 12/15 passed (failures: 1, errors: 1, skipped: 1)"
        );
        assert_eq!(lines[1], "[INFO] JaCoCo coverage: 85.0% (850/1000)");
        assert_eq!(
            lines[2],
            "[INFO] PITest mutation score: 70.0% (killed 7, survived 2, detected 7)"
        );
        assert_eq!(
            lines[3],
            "[INFO] Dependency-Check: 0 vulnerable dependencies detected"
        );
    }

    #[test]
    fn test_vulnerable_dependencies_warn_line() {
        let dependency = DependencyMetrics {
            scanned: 3,
            vulnerable_deps: 1,
            vulnerabilities: SeverityCounts {
                high: 1,
                unknown: 1,
                ..Default::default()
            },
        };
        let lines = build_console_lines(
            &TestMetrics::default(),
            &CoverageMetrics::default(),
            &MutationMetrics::default(),
            &dependency,
        );
        assert_eq!(
            lines[3],
            "[WARN] Dependency-Check: 1 vulnerable deps (2 findings)"
        );
    }
}
