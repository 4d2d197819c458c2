//! Derived-metric math and the metric normalizer
//!
//! [`percent`] is the single shared percentage helper: every percentage in
//! the system goes through it so the zero-guard and rounding behavior can
//! never diverge between call sites.
//!
//! The `normalize_*` functions map each raw report (or its absence) to the
//! fixed-shape normalized schema. Downstream consumers always see a fully
//! populated record; an absent report yields all-zero values.

use crate::models::{
    CoverageMetrics, DependencyMetrics, MutationMetrics, RawCoverage, RawDependencyScan,
    RawMutation, RawTestRun, TestMetrics,
};

/// Percentage of `part` in `whole`, rounded to one decimal.
///
/// Returns 0.0 when `whole` is 0; percentages are never a division fault.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places. Used for summed suite runtimes.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn normalize_tests(raw: Option<&RawTestRun>) -> TestMetrics {
    let Some(raw) = raw else {
        return TestMetrics::default();
    };
    // Counts come from a single consistent source, so the subtraction
    // cannot underflow; saturate anyway to keep the invariant structural.
    let passed = raw
        .tests
        .saturating_sub(raw.failures)
        .saturating_sub(raw.errors)
        .saturating_sub(raw.skipped);
    TestMetrics {
        total: raw.tests,
        passed,
        failed: raw.failures,
        errors: raw.errors,
        skipped: raw.skipped,
        duration: raw.time,
    }
}

pub fn normalize_coverage(raw: Option<&RawCoverage>) -> CoverageMetrics {
    let Some(raw) = raw else {
        return CoverageMetrics::default();
    };
    CoverageMetrics {
        percent: raw.pct,
        covered: raw.covered,
        total: raw.total,
    }
}

pub fn normalize_mutation(raw: Option<&RawMutation>) -> MutationMetrics {
    let Some(raw) = raw else {
        return MutationMetrics::default();
    };
    // Clamped at 0: the arithmetic could go negative if the report is
    // internally inconsistent.
    let no_coverage = raw.total.saturating_sub(raw.killed).saturating_sub(raw.survived);
    MutationMetrics {
        percent: raw.pct,
        killed: raw.killed,
        survived: raw.survived,
        no_coverage,
        detected: raw.detected,
        total: raw.total,
    }
}

pub fn normalize_dependency(raw: Option<&RawDependencyScan>) -> DependencyMetrics {
    let Some(raw) = raw else {
        return DependencyMetrics::default();
    };
    DependencyMetrics {
        scanned: raw.dependencies,
        vulnerable_deps: raw.vulnerable_dependencies,
        vulnerabilities: raw.severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityCounts;

    #[test]
    fn test_percent_zero_denominator() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(2, 3), 66.7);
        assert_eq!(percent(7, 10), 70.0);
        assert_eq!(percent(1, 8), 12.5);
    }

    #[test]
    fn test_percent_stays_in_range() {
        for whole in 1..=50u64 {
            for part in 0..=whole {
                let p = percent(part, whole);
                assert!((0.0..=100.0).contains(&p), "percent({part}, {whole}) = {p}");
            }
        }
    }

    #[test]
    fn test_normalize_tests_derives_passed() {
        let raw = RawTestRun {
            tests: 15,
            failures: 1,
            errors: 1,
            skipped: 1,
            time: 4.5,
        };
        let tests = normalize_tests(Some(&raw));
        assert_eq!(tests.total, 15);
        assert_eq!(tests.passed, 12);
        assert_eq!(tests.failed, 1);
        assert_eq!(tests.errors, 1);
        assert_eq!(tests.skipped, 1);
        assert_eq!(tests.duration, 4.5);
    }

    #[test]
    fn test_normalize_tests_absent_is_all_zero() {
        let tests = normalize_tests(None);
        assert_eq!(tests, TestMetrics::default());
    }

    #[test]
    fn test_normalize_coverage_absent_is_all_zero() {
        let coverage = normalize_coverage(None);
        assert_eq!(coverage.percent, 0.0);
        assert_eq!(coverage.covered, 0);
        assert_eq!(coverage.total, 0);
    }

    #[test]
    fn test_normalize_mutation_no_coverage_count() {
        // 10 records: 7 killed, 2 survived, 1 neither.
        let raw = RawMutation {
            total: 10,
            killed: 7,
            survived: 2,
            detected: 7,
            pct: percent(7, 10),
        };
        let mutation = normalize_mutation(Some(&raw));
        assert_eq!(mutation.no_coverage, 1);
        assert_eq!(mutation.percent, 70.0);
    }

    #[test]
    fn test_normalize_mutation_no_coverage_never_negative() {
        let raw = RawMutation {
            total: 3,
            killed: 3,
            survived: 2,
            detected: 3,
            pct: 100.0,
        };
        let mutation = normalize_mutation(Some(&raw));
        assert_eq!(mutation.no_coverage, 0);
    }

    #[test]
    fn test_normalize_dependency_absent_keeps_all_buckets() {
        let dependency = normalize_dependency(None);
        assert_eq!(dependency.scanned, 0);
        assert_eq!(dependency.vulnerable_deps, 0);
        assert_eq!(dependency.vulnerabilities, SeverityCounts::default());
    }
}
