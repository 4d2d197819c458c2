//! Presentation builders for the aggregated metrics
//!
//! Four surfaces are rendered from the same loaded reports:
//! - `summary` - Markdown metric table for the CI job summary
//! - `badges` - shields.io endpoint payloads
//! - `console` - log-style transcript embedded in the metrics envelope
//! - `timeline` - fixed pipeline-stage descriptors for the dashboard

pub mod badges;
pub mod console;
pub mod summary;
pub mod timeline;
