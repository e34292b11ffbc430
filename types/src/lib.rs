//! Workload domain types for microbench.
//!
//! This crate contains pure domain types with no IO, no timing, and minimal dependencies.
//! The kernels themselves live in `microbench-core`; this crate only names the
//! workloads and their inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Input of the fixed Fibonacci benchmark.
pub const FIBONACCI_BENCHMARK_INPUT: u32 = 35;

/// Exclusive upper bound of the fixed prime-counting benchmark.
pub const PRIME_COUNT_BENCHMARK_BOUND: i64 = 10_000;

/// F(35).
pub const EXPECTED_FIBONACCI_35: u64 = 9_227_465;

/// Number of primes in [2, 10000).
pub const EXPECTED_PRIMES_BELOW_10000: u64 = 1229;

/// Largest `n` for which F(n) fits in a `u64`.
pub const MAX_FIBONACCI_INPUT: u32 = 93;

// ============================================================================
// WorkloadKind
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadKind {
    Fibonacci,
    #[serde(rename = "primes")]
    PrimeCount,
}

impl WorkloadKind {
    pub const ALL: [WorkloadKind; 2] = [WorkloadKind::Fibonacci, WorkloadKind::PrimeCount];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::PrimeCount => "primes",
        }
    }

    /// What the workload stresses, for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Fibonacci => "naive recursive Fibonacci (call overhead, recursion)",
            Self::PrimeCount => "trial-division prime count (arithmetic, loop control)",
        }
    }

    /// The fixed-input workload the standalone binary runs.
    #[must_use]
    pub const fn benchmark(self) -> Workload {
        match self {
            Self::Fibonacci => Workload::FIBONACCI_BENCHMARK,
            Self::PrimeCount => Workload::PRIME_COUNT_BENCHMARK,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown workload: {0} (expected \"fibonacci\" or \"primes\")")]
pub struct UnknownWorkload(pub String);

impl FromStr for WorkloadKind {
    type Err = UnknownWorkload;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fibonacci" | "fib" => Ok(Self::Fibonacci),
            "primes" | "prime" | "prime-count" => Ok(Self::PrimeCount),
            other => Err(UnknownWorkload(other.to_string())),
        }
    }
}

// ============================================================================
// Workload
// ============================================================================

/// A single benchmark workload together with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Workload {
    /// Compute F(n) by naive double recursion.
    Fibonacci { n: u32 },
    /// Count primes in `[2, bound)` by trial division.
    #[serde(rename = "primes")]
    PrimeCount { bound: i64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("fibonacci input {n} overflows u64 (maximum is {max})", max = MAX_FIBONACCI_INPUT)]
    FibonacciOverflow { n: u32 },
}

impl Workload {
    pub const FIBONACCI_BENCHMARK: Workload = Workload::Fibonacci {
        n: FIBONACCI_BENCHMARK_INPUT,
    };

    pub const PRIME_COUNT_BENCHMARK: Workload = Workload::PrimeCount {
        bound: PRIME_COUNT_BENCHMARK_BOUND,
    };

    /// Result the fixed benchmark must produce, if this is one of them.
    #[must_use]
    pub fn expected_result(&self) -> Option<u64> {
        match *self {
            Self::FIBONACCI_BENCHMARK => Some(EXPECTED_FIBONACCI_35),
            Self::PRIME_COUNT_BENCHMARK => Some(EXPECTED_PRIMES_BELOW_10000),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), WorkloadError> {
        match *self {
            Self::Fibonacci { n } if n > MAX_FIBONACCI_INPUT => {
                Err(WorkloadError::FibonacciOverflow { n })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fibonacci { n } => write!(f, "fibonacci({n})"),
            Self::PrimeCount { bound } => write!(f, "primes(<{bound})"),
        }
    }
}
