//! Shared plumbing for the microbench binaries.
//!
//! ```text
//! fib, primes  -> init_tracing() -> kernel(fixed input) -> print_result()
//! microbench   -> init_tracing() -> BenchConfig + Overrides -> RunPlan -> run_workload()
//! ```

mod plan;
mod telemetry;

use std::io::{Write, stdout};

use anyhow::{Context, Result};

pub use plan::{Overrides, RunPlan};
pub use telemetry::init_tracing;

/// Print a benchmark result as the only line on stdout.
pub fn print_result(value: u64) -> Result<()> {
    let mut out = stdout().lock();
    writeln!(out, "{value}").context("failed to write result to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
