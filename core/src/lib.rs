//! Benchmark kernels and the timing runner for microbench.
//!
//! The kernels (`fibonacci`, `is_prime`, `count_primes_below`) are the
//! workloads themselves and are deliberately naive. Everything else in this
//! crate measures them:
//!
//! - **`runner`**: repeated timed execution with a determinism check
//! - **`stats`**: min/max/mean/percentile summaries of timing samples
//! - **`report`**: serializable run reports

mod fibonacci;
mod primes;
pub mod report;
pub mod runner;
pub mod stats;

pub use fibonacci::fibonacci;
pub use primes::{count_primes_below, is_prime};
pub use report::{BenchReport, WorkloadReport};
pub use runner::{RunError, RunSettings, run_workload, verify_benchmarks};
pub use stats::SampleStats;
