//! qadash - QA report aggregation CLI
//!
//! Thin binary wrapper: initialize logging, parse arguments, run the
//! aggregation once. Exits 0 on successful completion regardless of which
//! reports were present.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = qadash::cli::Cli::parse();

    // Logs go to stderr; stdout is reserved for the summary fallback.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    qadash::cli::run(cli)
}
