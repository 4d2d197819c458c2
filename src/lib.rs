//! qadash - QA report aggregation pipeline
//!
//! Reads the heterogeneous QA artifacts a build pipeline produces (JUnit
//! test results, JaCoCo coverage, PITest mutations, Dependency-Check
//! scans, SpotBugs reports), normalizes them into a stable metrics model,
//! and renders that model as a Markdown summary, badge payloads, and a
//! consolidated dashboard JSON document.

pub mod cli;
pub mod config;
pub mod loaders;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod sinks;
