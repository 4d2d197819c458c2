//! Core data models for qadash
//!
//! These models represent the three layers the pipeline moves data through:
//! raw report records as extracted from build artifacts, the normalized
//! metrics schema consumed downstream, and the presentation payloads
//! (badges, timeline, envelope) written to the output sinks.
//!
//! Raw report presence is modeled with `Option`: `Some(record)` means the
//! report was found and parsed, `None` means it was missing or unreadable.
//! A zeroed record inside `Some` is therefore never confused with an absent
//! report anywhere downstream.

use serde::{Deserialize, Serialize};

/// Severity buckets for dependency vulnerabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Display order used by the summary table and the histogram.
    pub const ORDER: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Unknown,
    ];

    /// Bucket a severity string from a scan report. Matching is
    /// case-insensitive; anything unrecognized folds into `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
            Severity::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Vulnerability counts per severity bucket.
///
/// All five buckets are always present, even at zero, so consumers never
/// branch on key existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub unknown: u64,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
            Severity::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low + self.unknown
    }
}

// ---------------------------------------------------------------------------
// Raw report records, one per source format
// ---------------------------------------------------------------------------

/// Aggregated JUnit results summed across all Surefire suite files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTestRun {
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    /// Total suite runtime in seconds, rounded to 2 decimals.
    pub time: f64,
}

/// Line-level coverage extracted from the JaCoCo report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCoverage {
    pub covered: u64,
    pub missed: u64,
    pub total: u64,
    pub pct: f64,
}

/// Mutation counts extracted from the PITest report.
///
/// A parseable report with zero mutation records produces a zeroed record,
/// which is distinct from the report being absent: the tool ran and found
/// nothing to mutate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMutation {
    pub total: u64,
    pub killed: u64,
    pub survived: u64,
    pub detected: u64,
    pub pct: f64,
}

/// Dependency-Check scan counts and severity histogram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDependencyScan {
    pub dependencies: u64,
    pub vulnerable_dependencies: u64,
    pub vulnerabilities: u64,
    pub severity: SeverityCounts,
}

// ---------------------------------------------------------------------------
// Normalized metrics: the stable downstream schema
// ---------------------------------------------------------------------------

/// Test results, fully populated regardless of report presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestMetrics {
    pub total: u64,
    /// Derived as `total - failed - errors - skipped`, never read from a
    /// source field.
    pub passed: u64,
    pub failed: u64,
    pub errors: u64,
    pub skipped: u64,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    pub percent: f64,
    pub covered: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationMetrics {
    pub percent: f64,
    pub killed: u64,
    pub survived: u64,
    /// `total - killed - survived`, clamped at 0.
    pub no_coverage: u64,
    pub detected: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMetrics {
    pub scanned: u64,
    pub vulnerable_deps: u64,
    pub vulnerabilities: SeverityCounts,
}

// ---------------------------------------------------------------------------
// Presentation payloads
// ---------------------------------------------------------------------------

/// One shields.io endpoint payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgePayload {
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    pub color: String,
}

/// One pipeline stage in the dashboard timeline. Durations are nominal
/// annotations, not measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    pub stage: String,
    pub duration: u64,
    pub status: String,
    pub short: String,
}

/// Identity of the run that produced the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub repo: String,
    pub workflow: String,
    pub os: String,
    pub jdk: String,
    pub branch: String,
    /// First 7 characters of the commit SHA.
    pub commit: String,
    pub author: String,
    pub timestamp: String,
}

/// The consolidated metrics document consumed by the dashboard UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsEnvelope {
    pub run: RunMetadata,
    pub tests: TestMetrics,
    pub coverage: CoverageMetrics,
    pub mutation: MutationMetrics,
    pub dependency_check: DependencyMetrics,
    pub timeline: Vec<TimelineStage>,
    pub console: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_label_folds_unrecognized() {
        assert_eq!(Severity::from_label("HIGH"), Severity::High);
        assert_eq!(Severity::from_label("high"), Severity::High);
        assert_eq!(Severity::from_label("Critical"), Severity::Critical);
        assert_eq!(Severity::from_label("ZZZ"), Severity::Unknown);
        assert_eq!(Severity::from_label(""), Severity::Unknown);
    }

    #[test]
    fn test_severity_counts_always_five_keys() {
        let counts = SeverityCounts::default();
        let json = serde_json::to_value(&counts).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["critical", "high", "medium", "low", "unknown"] {
            assert_eq!(obj[key], 0, "missing or nonzero key {key}");
        }
    }

    #[test]
    fn test_severity_counts_add_and_total() {
        let mut counts = SeverityCounts::default();
        counts.add(Severity::High);
        counts.add(Severity::Unknown);
        counts.add(Severity::High);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.unknown, 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(Severity::High), 2);
        assert_eq!(counts.get(Severity::Critical), 0);
    }

    #[test]
    fn test_envelope_json_keys_are_camel_case() {
        let envelope = MetricsEnvelope {
            run: RunMetadata {
                repo: "r".into(),
                workflow: "w".into(),
                os: "o".into(),
                jdk: "21".into(),
                branch: "main".into(),
                commit: "abc1234".into(),
                author: "a".into(),
                timestamp: "t".into(),
            },
            tests: TestMetrics::default(),
            coverage: CoverageMetrics::default(),
            mutation: MutationMetrics::default(),
            dependency_check: DependencyMetrics::default(),
            timeline: vec![],
            console: vec![],
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("dependencyCheck").is_some());
        assert!(json["mutation"].get("noCoverage").is_some());
        assert!(json["dependencyCheck"].get("vulnerableDeps").is_some());
        assert!(json.get("console").is_some());
    }

    #[test]
    fn test_badge_payload_schema_version_key() {
        let badge = BadgePayload {
            schema_version: 1,
            label: "JaCoCo".into(),
            message: "85.0%".into(),
            color: "16A34A".into(),
        };
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(json["schemaVersion"], 1);
        assert_eq!(json["label"], "JaCoCo");
    }
}
