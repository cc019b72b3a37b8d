//! Timing harness entry point.
//!
//! Takes no arguments and prints two lines:
//!
//! ```text
//! <average microseconds per dot product>us
//! <last dot product result>
//! ```

use std::io;

use anyhow::Context;
use dot_bench::harness::{self, HarnessConfig};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr only; stdout carries the two report lines
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .try_init();

    let report = harness::run(&HarnessConfig::default());

    let stdout = io::stdout();
    harness::write_report(&report, &mut stdout.lock()).context("failed to write report")?;

    Ok(())
}
