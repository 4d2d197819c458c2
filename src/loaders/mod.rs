//! Report loaders, one per QA artifact format
//!
//! Each loader implements the [`ReportLoader`] trait: given the fixed
//! artifact locations it either produces a parsed raw record (`Some`) or an
//! explicit absent signal (`None`). Loaders never return errors — a missing
//! artifact is the common case when a pipeline gate was skipped, and a
//! malformed artifact must not block reporting on the others. Each
//! implementation owns its own malformed-input recovery.

mod depcheck;
mod jacoco;
mod pitest;
mod spotbugs;
mod surefire;

pub use depcheck::DependencyCheckLoader;
pub use jacoco::JacocoLoader;
pub use pitest::PitestLoader;
pub use spotbugs::SpotBugsLoader;
pub use surefire::SurefireLoader;

use quick_xml::events::BytesStart;

use crate::config::ReportPaths;

/// Defensive single-artifact loading capability.
///
/// Implementations must degrade to `None` for both "file not found" and
/// "file exists but is unparsable"; the distinction is logged, never raised.
pub trait ReportLoader {
    /// Raw record this loader extracts.
    type Report;

    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Attempt to load and parse the artifact.
    fn load(&self, paths: &ReportPaths) -> Option<Self::Report>;
}

/// Read a string attribute from an XML element, if present.
pub(crate) fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Numeric attribute with a defensive zero default. A well-formed document
/// with a garbled count degrades to 0 rather than sinking the whole report.
pub(crate) fn attr_u64(e: &BytesStart<'_>, name: &[u8]) -> u64 {
    attr(e, name).and_then(|v| v.parse().ok()).unwrap_or(0)
}

pub(crate) fn attr_f64(e: &BytesStart<'_>, name: &[u8]) -> f64 {
    attr(e, name).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}
