//! Serializable run reports.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use microbench_types::Workload;

use crate::stats::SampleStats;

/// Outcome of timing one workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub workload: Workload,
    pub result: u64,
    pub iterations: usize,
    pub stats: SampleStats,
}

impl WorkloadReport {
    #[must_use]
    pub fn new(workload: Workload, result: u64, stats: SampleStats) -> Self {
        Self {
            workload,
            result,
            iterations: stats.samples,
            stats,
        }
    }
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}  [{} runs: min {:?}, mean {:?}, p50 {:?}, p95 {:?}]",
            self.workload,
            self.result,
            self.iterations,
            self.stats.min(),
            self.stats.mean(),
            self.stats.p50(),
            self.stats.p95(),
        )
    }
}

/// A full runner invocation: one entry per workload, in run order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchReport {
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    pub workloads: Vec<WorkloadReport>,
}

impl BenchReport {
    #[must_use]
    pub fn new(workloads: Vec<WorkloadReport>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            workloads,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
