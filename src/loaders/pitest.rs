//! PITest mutation-testing loader
//!
//! Counts `<mutation>` records by status and by the `detected` flag. A
//! report that parses but contains zero mutation records loads as a zeroed
//! record, not as absent: the tool ran and found nothing to mutate.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{attr, ReportLoader};
use crate::config::ReportPaths;
use crate::metrics::percent;
use crate::models::RawMutation;

pub struct PitestLoader;

impl ReportLoader for PitestLoader {
    type Report = RawMutation;

    fn name(&self) -> &'static str {
        "pitest"
    }

    fn load(&self, paths: &ReportPaths) -> Option<RawMutation> {
        let content = std::fs::read_to_string(&paths.pitest_xml).ok()?;
        let report = parse_report(&content);
        if report.is_none() {
            tracing::debug!("pitest: unparsable report {}", paths.pitest_xml.display());
        }
        report
    }
}

fn parse_report(xml: &str) -> Option<RawMutation> {
    let mut reader = Reader::from_str(xml);
    let mut total = 0u64;
    let mut killed = 0u64;
    let mut survived = 0u64;
    let mut detected = 0u64;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() != b"mutation" {
                    continue;
                }
                total += 1;
                match attr(&e, b"status").as_deref() {
                    Some("KILLED") => killed += 1,
                    Some("SURVIVED") => survived += 1,
                    _ => {}
                }
                if attr(&e, b"detected").as_deref() == Some("true") {
                    detected += 1;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
    }

    Some(RawMutation {
        total,
        killed,
        survived,
        detected,
        pct: percent(killed, total),
    })
}
