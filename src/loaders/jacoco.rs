//! JaCoCo coverage loader
//!
//! Extracts the line-level `<counter>` from the JaCoCo XML report. Counters
//! that are direct children of the document root are preferred (that is
//! where the report-wide totals live); if the root has no counters at all,
//! the search widens to any depth.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{attr, attr_u64, ReportLoader};
use crate::config::ReportPaths;
use crate::metrics::percent;
use crate::models::RawCoverage;

pub struct JacocoLoader;

impl ReportLoader for JacocoLoader {
    type Report = RawCoverage;

    fn name(&self) -> &'static str {
        "jacoco"
    }

    fn load(&self, paths: &ReportPaths) -> Option<RawCoverage> {
        load_file(&paths.jacoco_xml)
    }
}

fn load_file(path: &Path) -> Option<RawCoverage> {
    let content = std::fs::read_to_string(path).ok()?;
    let report = parse_report(&content);
    if report.is_none() {
        tracing::debug!("jacoco: no LINE counter in {}", path.display());
    }
    report
}

/// A counter element observed during the scan: element depth plus the
/// `type`, `covered`, and `missed` attributes.
struct Counter {
    depth: usize,
    kind: Option<String>,
    covered: u64,
    missed: u64,
}

fn parse_report(xml: &str) -> Option<RawCoverage> {
    let mut reader = Reader::from_str(xml);
    let mut counters: Vec<Counter> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"counter" {
                    counters.push(read_counter(&e, depth));
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"counter" {
                    counters.push(read_counter(&e, depth));
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
    }

    // Depth 1 = direct child of the document root. Fall back to the full
    // set only when the root carries no counters.
    let has_direct = counters.iter().any(|c| c.depth == 1);
    counters
        .iter()
        .filter(|c| !has_direct || c.depth == 1)
        .find(|c| c.kind.as_deref() == Some("LINE"))
        .map(|c| {
            let total = c.covered + c.missed;
            RawCoverage {
                covered: c.covered,
                missed: c.missed,
                total,
                pct: percent(c.covered, total),
            }
        })
}

fn read_counter(e: &quick_xml::events::BytesStart<'_>, depth: usize) -> Counter {
    Counter {
        depth,
        kind: attr(e, b"type"),
        covered: attr_u64(e, b"covered"),
        missed: attr_u64(e, b"missed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_line_counter_from_root() {
        let xml = r#"<report name="app">
            <package name="p">
                <counter type="LINE" missed="50" covered="50"/>
            </package>
            <counter type="INSTRUCTION" missed="10" covered="90"/>
            <counter type="LINE" missed="20" covered="80"/>
        </report>"#;

        let coverage = parse_report(xml).expect("present");
        assert_eq!(coverage.covered, 80);
        assert_eq!(coverage.missed, 20);
        assert_eq!(coverage.total, 100);
        assert_eq!(coverage.pct, 80.0);
    }

    #[test]
    fn falls_back_to_nested_counters() {
        // No counters directly under the root: the broader search applies.
        let xml = r#"<report name="app">
            <package name="p">
                <counter type="LINE" missed="1" covered="2"/>
            </package>
        </report>"#;

        let coverage = parse_report(xml).expect("present");
        assert_eq!(coverage.covered, 2);
        assert_eq!(coverage.total, 3);
        assert_eq!(coverage.pct, 66.7);
    }

    #[test]
    fn no_line_counter_is_absent_even_when_parseable() {
        let xml = r#"<report name="app">
            <counter type="BRANCH" missed="5" covered="5"/>
        </report>"#;
        assert!(parse_report(xml).is_none());
    }

    #[test]
    fn malformed_report_is_absent() {
        assert!(parse_report("<report><counter type=").is_none());
    }

    #[test]
    fn missing_file_is_absent() {
        assert!(load_file(Path::new("/does/not/exist.xml")).is_none());
    }

    #[test]
    fn zero_total_has_zero_percent() {
        let xml = r#"<report><counter type="LINE" missed="0" covered="0"/></report>"#;
        let coverage = parse_report(xml).expect("present");
        assert_eq!(coverage.pct, 0.0);
        assert_eq!(coverage.total, 0);
    }
}
