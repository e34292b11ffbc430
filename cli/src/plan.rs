//! Resolution of runner settings: command line over config over defaults.

use microbench_config::BenchConfig;
use microbench_core::RunSettings;
use microbench_types::{Workload, WorkloadKind};

/// Values given on the command line. `None` defers to the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub iterations: Option<u32>,
    pub warmup: Option<u32>,
    pub n: Option<u32>,
    pub bound: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub settings: RunSettings,
    pub workloads: Vec<Workload>,
}

impl RunPlan {
    #[must_use]
    pub fn resolve(config: &BenchConfig, overrides: &Overrides, kinds: &[WorkloadKind]) -> Self {
        let defaults = RunSettings::default();
        let settings = RunSettings {
            iterations: overrides
                .iterations
                .or(config.iterations())
                .unwrap_or(defaults.iterations),
            warmup: overrides
                .warmup
                .or(config.warmup())
                .unwrap_or(defaults.warmup),
        };

        let workloads = kinds
            .iter()
            .map(|&kind| match config.workload(kind) {
                Workload::Fibonacci { n } => Workload::Fibonacci {
                    n: overrides.n.unwrap_or(n),
                },
                Workload::PrimeCount { bound } => Workload::PrimeCount {
                    bound: overrides.bound.unwrap_or(bound),
                },
            })
            .collect();

        Self {
            settings,
            workloads,
        }
    }
}
