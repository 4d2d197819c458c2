//! SpotBugs static-analysis loader
//!
//! Tries a short ordered list of candidate report names and counts
//! `<BugInstance>` records in the first one that exists. The result is an
//! issue count, or `None` for "unknown" — a missing report and an
//! unparsable report both read as unknown, which is distinct from a clean
//! report counting zero.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ReportLoader;
use crate::config::ReportPaths;

pub struct SpotBugsLoader;

impl ReportLoader for SpotBugsLoader {
    type Report = u64;

    fn name(&self) -> &'static str {
        "spotbugs"
    }

    fn load(&self, paths: &ReportPaths) -> Option<u64> {
        for candidate in &paths.spotbugs_candidates {
            if !candidate.exists() {
                continue;
            }
            let count = std::fs::read_to_string(candidate)
                .ok()
                .and_then(|content| parse_report(&content));
            if count.is_none() {
                tracing::debug!("spotbugs: unparsable report {}", candidate.display());
            }
            // First existing candidate decides, even on parse failure.
            return count;
        }
        None
    }
}

fn parse_report(xml: &str) -> Option<u64> {
    let mut reader = Reader::from_str(xml);
    let mut count = 0u64;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"BugInstance" {
                    count += 1;
                }
            }
            Ok(Event::Eof) => return Some(count),
            Err(_) => return None,
            _ => {}
        }
    }
}
