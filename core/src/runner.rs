//! Repeated, timed execution of workloads.
//!
//! ```text
//! run_workload(workload, settings)
//!   -> validate -> warmup x N (untimed) -> iterations x M (timed)
//!   -> every result must equal the first -> WorkloadReport
//! ```

use std::hint::black_box;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use microbench_types::{Workload, WorkloadError};

use crate::report::WorkloadReport;
use crate::stats::SampleStats;
use crate::{count_primes_below, fibonacci};

pub const DEFAULT_ITERATIONS: u32 = 5;
pub const DEFAULT_WARMUP: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Timed executions. Must be at least 1.
    pub iterations: u32,
    /// Untimed executions before timing starts.
    pub warmup: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }
}

impl RunSettings {
    /// One timed run, no warmup.
    pub const SINGLE: RunSettings = RunSettings {
        iterations: 1,
        warmup: 0,
    };
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Workload(#[from] WorkloadError),
    #[error("at least one timed iteration is required")]
    NoIterations,
    #[error("{workload} returned {actual} after previously returning {expected}")]
    Nondeterministic {
        workload: String,
        expected: u64,
        actual: u64,
    },
    #[error("{workload} returned {actual}, expected {expected}")]
    UnexpectedResult {
        workload: String,
        expected: u64,
        actual: u64,
    },
}

/// Run the kernel for `workload` once, untimed.
fn execute(workload: &Workload) -> u64 {
    match *workload {
        Workload::Fibonacci { n } => fibonacci(black_box(n)),
        Workload::PrimeCount { bound } => count_primes_below(black_box(bound)),
    }
}

/// Time `settings.iterations` executions of `workload` after `settings.warmup`
/// untimed ones.
pub fn run_workload(workload: &Workload, settings: &RunSettings) -> Result<WorkloadReport, RunError> {
    workload.validate()?;

    let label = workload.to_string();
    let (result, samples) = time_runs(&label, settings, || execute(workload))?;
    let stats = SampleStats::from_samples(&samples).ok_or(RunError::NoIterations)?;

    info!(
        workload = %label,
        result,
        iterations = settings.iterations,
        mean = ?stats.mean(),
        p50 = ?stats.p50(),
        "Workload finished"
    );

    Ok(WorkloadReport::new(*workload, result, stats))
}

fn time_runs<F>(label: &str, settings: &RunSettings, mut run: F) -> Result<(u64, Vec<Duration>), RunError>
where
    F: FnMut() -> u64,
{
    if settings.iterations == 0 {
        return Err(RunError::NoIterations);
    }

    let mut expected: Option<u64> = None;
    let mut check = |actual: u64| -> Result<u64, RunError> {
        match expected {
            Some(expected) if expected != actual => Err(RunError::Nondeterministic {
                workload: label.to_string(),
                expected,
                actual,
            }),
            Some(_) => Ok(actual),
            None => {
                expected = Some(actual);
                Ok(actual)
            }
        }
    };

    for round in 0..settings.warmup {
        let value = black_box(run());
        check(value)?;
        debug!(workload = label, round, "Warmup run");
    }

    let mut samples = Vec::with_capacity(settings.iterations as usize);
    let mut result = 0;
    for round in 0..settings.iterations {
        let start = Instant::now();
        let value = black_box(run());
        let elapsed = start.elapsed();
        result = check(value)?;
        debug!(workload = label, round, elapsed = ?elapsed, "Timed run");
        samples.push(elapsed);
    }

    Ok((result, samples))
}

/// Run both fixed benchmarks once and compare with their known results.
pub fn verify_benchmarks() -> Result<Vec<WorkloadReport>, RunError> {
    [Workload::FIBONACCI_BENCHMARK, Workload::PRIME_COUNT_BENCHMARK]
        .iter()
        .map(|workload| {
            let report = run_workload(workload, &RunSettings::SINGLE)?;
            check_expected(workload, report.result)?;
            Ok(report)
        })
        .collect()
}

/// Workloads without a known result always pass.
fn check_expected(workload: &Workload, actual: u64) -> Result<(), RunError> {
    match workload.expected_result() {
        Some(expected) if expected != actual => Err(RunError::UnexpectedResult {
            workload: workload.to_string(),
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}
