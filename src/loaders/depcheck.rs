//! OWASP Dependency-Check loader
//!
//! Reads the JSON scan report: a list of dependencies, each optionally
//! carrying vulnerabilities with a severity string. Produces dependency and
//! vulnerability counts plus the five-bucket severity histogram.

use serde::Deserialize;

use super::ReportLoader;
use crate::config::ReportPaths;
use crate::models::{RawDependencyScan, Severity};

pub struct DependencyCheckLoader;

impl ReportLoader for DependencyCheckLoader {
    type Report = RawDependencyScan;

    fn name(&self) -> &'static str {
        "dependency-check"
    }

    fn load(&self, paths: &ReportPaths) -> Option<RawDependencyScan> {
        let content = std::fs::read_to_string(&paths.depcheck_json).ok()?;
        match serde_json::from_str::<Report>(&content) {
            Ok(report) => Some(summarize(report)),
            Err(e) => {
                tracing::debug!(
                    "dependency-check: unparsable report {}: {}",
                    paths.depcheck_json.display(),
                    e
                );
                None
            }
        }
    }
}

// Tolerant view of the scan document: only the fields we extract, every one
// of them defaulted.
#[derive(Debug, Deserialize)]
struct Report {
    #[serde(default)]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    #[serde(default)]
    vulnerabilities: Option<Vec<Vulnerability>>,
}

#[derive(Debug, Deserialize)]
struct Vulnerability {
    #[serde(default)]
    severity: Option<String>,
}

fn summarize(report: Report) -> RawDependencyScan {
    let mut scan = RawDependencyScan {
        dependencies: report.dependencies.len() as u64,
        ..Default::default()
    };

    for dependency in &report.dependencies {
        let Some(vulns) = dependency.vulnerabilities.as_deref() else {
            continue;
        };
        if vulns.is_empty() {
            continue;
        }
        scan.vulnerable_dependencies += 1;
        scan.vulnerabilities += vulns.len() as u64;
        for vuln in vulns {
            let label = vuln.severity.as_deref().unwrap_or("UNKNOWN");
            scan.severity.add(Severity::from_label(label));
        }
    }

    scan
}
