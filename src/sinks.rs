//! Output sinks
//!
//! Three destinations: the CI job summary (append, or print when no sink is
//! configured), the badge directory, and the dashboard directory holding
//! the consolidated `metrics.json`. Badge failures are warnings — the rest
//! of the pipeline proceeds without them.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ReportPaths;
use crate::models::{BadgePayload, MetricsEnvelope};

/// Append the summary to the configured sink, or print it to stdout.
pub fn append_summary(sink: Option<&Path>, text: &str) -> Result<()> {
    match sink {
        Some(path) => {
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open summary sink {}", path.display()))?;
            file.write_all(text.as_bytes())
                .with_context(|| format!("failed to append summary to {}", path.display()))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Write each badge payload as a compact JSON file into `badge_dir`.
///
/// Failure to create the directory (or to write an individual badge) is
/// reported as a warning and badge output is skipped for the run.
pub fn write_badges(badge_dir: &Path, badges: &[(&'static str, BadgePayload)]) {
    if let Err(e) = std::fs::create_dir_all(badge_dir) {
        tracing::warn!(
            "unable to create badge directory {}: {}",
            badge_dir.display(),
            e
        );
        return;
    }
    for (filename, payload) in badges {
        let path = badge_dir.join(filename);
        match serde_json::to_string(payload) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("unable to write badge {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("unable to serialize badge {}: {}", filename, e),
        }
    }
    tracing::info!("updated badge JSON in {}", badge_dir.display());
}

/// Populate the dashboard directory and write `metrics.json` into it.
///
/// When a prebuilt UI bundle is present the dashboard directory is deleted
/// and replaced with a copy of the bundle first, so stale content from a
/// previous run never sits next to a fresh metrics document.
pub fn write_dashboard(paths: &ReportPaths, envelope: &MetricsEnvelope) -> Result<()> {
    if paths.dashboard_bundle.exists() {
        let _ = std::fs::remove_dir_all(&paths.dashboard_dir);
        copy_dir(&paths.dashboard_bundle, &paths.dashboard_dir).with_context(|| {
            format!(
                "failed to copy dashboard bundle into {}",
                paths.dashboard_dir.display()
            )
        })?;
    } else {
        std::fs::create_dir_all(&paths.dashboard_dir).with_context(|| {
            format!(
                "failed to create dashboard directory {}",
                paths.dashboard_dir.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(envelope)
        .context("failed to serialize metrics envelope")?;
    let metrics_path = paths.dashboard_dir.join("metrics.json");
    std::fs::write(&metrics_path, json)
        .with_context(|| format!("failed to write {}", metrics_path.display()))?;

    if paths.dashboard_helper.exists() {
        std::fs::copy(&paths.dashboard_helper, &paths.dashboard_helper_dest).with_context(
            || {
                format!(
                    "failed to copy dashboard helper to {}",
                    paths.dashboard_helper_dest.display()
                )
            },
        )?;
    }

    Ok(())
}

fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CoverageMetrics, DependencyMetrics, MutationMetrics, RunMetadata, TestMetrics,
    };

    fn sample_envelope() -> MetricsEnvelope {
        MetricsEnvelope {
            run: RunMetadata {
                repo: "r".into(),
                workflow: "w".into(),
                os: "linux".into(),
                jdk: "21".into(),
                branch: "main".into(),
                commit: "abc1234".into(),
                author: "dev".into(),
                timestamp: "2026-01-01 00:00:00 UTC".into(),
            },
            tests: TestMetrics::default(),
            coverage: CoverageMetrics::default(),
            mutation: MutationMetrics::default(),
            dependency_check: DependencyMetrics::default(),
            timeline: vec![],
            console: vec![],
        }
    }

    #[test]
    fn test_append_summary_appends_to_existing_log() {
        let tmp = tempfile::tempdir().unwrap();
        let sink = tmp.path().join("summary.md");
        std::fs::write(&sink, "earlier content\n").unwrap();

        append_summary(Some(&sink), "### QA Metrics\n").unwrap();
        append_summary(Some(&sink), "second run\n").unwrap();

        let content = std::fs::read_to_string(&sink).unwrap();
        assert_eq!(content, "earlier content\n### QA Metrics\nsecond run\n");
    }

    #[test]
    fn test_write_badges_creates_directory_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let badge_dir = tmp.path().join("badges");
        let badges = crate::reporters::badges::build_badges(None, None, Some(0), None);

        write_badges(&badge_dir, &badges);

        for name in ["jacoco.json", "mutation.json", "spotbugs.json", "dependency.json"] {
            let content = std::fs::read_to_string(badge_dir.join(name)).unwrap();
            let json: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert_eq!(json["schemaVersion"], 1);
        }
    }

    #[test]
    fn test_write_badges_unwritable_directory_is_not_fatal() {
        // A file where the directory should be makes create_dir_all fail.
        let tmp = tempfile::tempdir().unwrap();
        let blocked = tmp.path().join("badges");
        std::fs::write(&blocked, "in the way").unwrap();

        let badges = crate::reporters::badges::build_badges(None, None, None, None);
        write_badges(&blocked, &badges);
        // Still a file, and nothing panicked.
        assert!(blocked.is_file());
    }

    #[test]
    fn test_write_dashboard_without_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ReportPaths::new(tmp.path());

        write_dashboard(&paths, &sample_envelope()).unwrap();

        let metrics = std::fs::read_to_string(paths.dashboard_dir.join("metrics.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&metrics).unwrap();
        assert_eq!(json["run"]["branch"], "main");
    }

    #[test]
    fn test_write_dashboard_replaces_stale_content_with_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ReportPaths::new(tmp.path());

        // Stale dashboard from a previous run.
        std::fs::create_dir_all(&paths.dashboard_dir).unwrap();
        std::fs::write(paths.dashboard_dir.join("stale.js"), "old").unwrap();

        // Prebuilt bundle with a nested asset.
        std::fs::create_dir_all(paths.dashboard_bundle.join("assets")).unwrap();
        std::fs::write(paths.dashboard_bundle.join("index.html"), "<html>").unwrap();
        std::fs::write(paths.dashboard_bundle.join("assets/app.js"), "js").unwrap();

        write_dashboard(&paths, &sample_envelope()).unwrap();

        assert!(!paths.dashboard_dir.join("stale.js").exists());
        assert!(paths.dashboard_dir.join("index.html").exists());
        assert!(paths.dashboard_dir.join("assets/app.js").exists());
        assert!(paths.dashboard_dir.join("metrics.json").exists());
    }

    #[test]
    fn test_write_dashboard_copies_helper_script() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = ReportPaths::new(tmp.path());
        std::fs::create_dir_all(paths.dashboard_helper.parent().unwrap()).unwrap();
        std::fs::write(&paths.dashboard_helper, "#!/usr/bin/env python3\n").unwrap();

        write_dashboard(&paths, &sample_envelope()).unwrap();

        assert!(paths.dashboard_helper_dest.exists());
    }
}
