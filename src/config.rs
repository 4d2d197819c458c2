//! Run configuration and artifact locations
//!
//! All environment lookups happen once, in [`RunConfig::from_env`], so the
//! rest of the pipeline is pure and testable without environment mocking.
//! [`ReportPaths`] pins the convention-based artifact locations under the
//! build output directory of the project being summarized.

use std::path::{Path, PathBuf};

/// Environment-derived configuration, captured once at startup.
///
/// Each field stores the raw variable; accessors apply the documented
/// defaults. `local` is the placeholder for identifiers that only exist on
/// a CI runner.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// `MATRIX_OS` — operating-system label of the build matrix cell.
    pub matrix_os: Option<String>,
    /// `MATRIX_JAVA` — runtime-version label of the build matrix cell.
    pub matrix_java: Option<String>,
    /// `RUNNER_OS` — CI runner OS, fallback for run metadata.
    pub runner_os: Option<String>,
    /// `GITHUB_STEP_SUMMARY` — append target for the Markdown summary.
    /// Unset means print to stdout.
    pub step_summary: Option<PathBuf>,
    /// `UPDATE_BADGES` — truthy (`1`/`true`/`yes`) enables badge output.
    pub update_badges: bool,
    /// `BADGE_OUTPUT_DIR` — overrides the default `badges/` directory.
    pub badge_dir: Option<PathBuf>,
    /// `GITHUB_REPOSITORY`, `GITHUB_WORKFLOW`, `GITHUB_REF_NAME`,
    /// `GITHUB_SHA`, `GITHUB_ACTOR` — run identity for the envelope.
    pub repository: Option<String>,
    pub workflow: Option<String>,
    pub ref_name: Option<String>,
    pub sha: Option<String>,
    pub actor: Option<String>,
}

impl RunConfig {
    /// Snapshot the recognized environment variables.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            matrix_os: var("MATRIX_OS"),
            matrix_java: var("MATRIX_JAVA"),
            runner_os: var("RUNNER_OS"),
            step_summary: var("GITHUB_STEP_SUMMARY").map(PathBuf::from),
            update_badges: var("UPDATE_BADGES").is_some_and(|v| truthy(&v)),
            badge_dir: var("BADGE_OUTPUT_DIR").map(PathBuf::from),
            repository: var("GITHUB_REPOSITORY"),
            workflow: var("GITHUB_WORKFLOW"),
            ref_name: var("GITHUB_REF_NAME"),
            sha: var("GITHUB_SHA"),
            actor: var("GITHUB_ACTOR"),
        }
    }

    /// OS label for the summary header.
    pub fn header_os(&self) -> &str {
        self.matrix_os.as_deref().unwrap_or("unknown-os")
    }

    /// Runtime-version label for the summary header.
    pub fn header_java(&self) -> &str {
        self.matrix_java.as_deref().unwrap_or("unknown")
    }

    /// OS label for run metadata: matrix cell, then runner, then `local`.
    pub fn metadata_os(&self) -> &str {
        self.matrix_os
            .as_deref()
            .or(self.runner_os.as_deref())
            .unwrap_or("local")
    }

    pub fn metadata_java(&self) -> &str {
        self.matrix_java.as_deref().unwrap_or("local")
    }

    pub fn repository(&self) -> &str {
        self.repository.as_deref().unwrap_or("local")
    }

    pub fn workflow(&self) -> &str {
        self.workflow.as_deref().unwrap_or("local")
    }

    pub fn branch(&self) -> &str {
        self.ref_name.as_deref().unwrap_or("local")
    }

    /// Commit SHA truncated to 7 characters.
    pub fn short_commit(&self) -> String {
        let sha = self.sha.as_deref().unwrap_or("local");
        sha.chars().take(7).collect()
    }

    pub fn author(&self) -> &str {
        self.actor.as_deref().unwrap_or("local")
    }
}

/// Boolean-like environment values accepted by `UPDATE_BADGES`.
pub fn truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Fixed artifact locations, resolved once from the project root.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub root: PathBuf,
    /// Directory of per-suite `TEST-*.xml` files.
    pub surefire_dir: PathBuf,
    pub jacoco_xml: PathBuf,
    pub pitest_xml: PathBuf,
    pub depcheck_json: PathBuf,
    /// Ordered candidates; the first that exists wins.
    pub spotbugs_candidates: [PathBuf; 2],
    /// Default badge output directory (`badges/` under the root).
    pub badges_dir: PathBuf,
    /// Dashboard output directory; destructively replaced when a prebuilt
    /// bundle is copied in.
    pub dashboard_dir: PathBuf,
    /// Prebuilt dashboard UI bundle, copied into `dashboard_dir` if present.
    pub dashboard_bundle: PathBuf,
    /// Helper script copied next to the dashboard if present.
    pub dashboard_helper: PathBuf,
    /// Destination for the helper script.
    pub dashboard_helper_dest: PathBuf,
}

impl ReportPaths {
    pub fn new(root: &Path) -> Self {
        let target = root.join("target");
        Self {
            root: root.to_path_buf(),
            surefire_dir: target.join("surefire-reports"),
            jacoco_xml: target.join("site").join("jacoco").join("jacoco.xml"),
            pitest_xml: target.join("pit-reports").join("mutations.xml"),
            depcheck_json: target.join("dependency-check-report.json"),
            spotbugs_candidates: [target.join("spotbugsXml.xml"), target.join("spotbugs.xml")],
            badges_dir: root.join("badges"),
            dashboard_dir: target.join("site").join("qa-dashboard"),
            dashboard_bundle: root.join("ui").join("qa-dashboard").join("dist"),
            dashboard_helper: root.join("scripts").join("serve_quality_dashboard.py"),
            dashboard_helper_dest: target.join("site").join("serve_quality_dashboard.py"),
        }
    }

    /// Badge directory after applying the configured override.
    pub fn badge_dir<'a>(&'a self, config: &'a RunConfig) -> &'a Path {
        config.badge_dir.as_deref().unwrap_or(&self.badges_dir)
    }
}
