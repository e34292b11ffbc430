//! Summary statistics over timing samples.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Summary of a set of timing samples, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStats {
    pub samples: usize,
    pub min_ns: u64,
    pub max_ns: u64,
    pub mean_ns: u64,
    pub p50_ns: u64,
    pub p95_ns: u64,
}

impl SampleStats {
    /// Summarize `samples`. Returns `None` when there is nothing to summarize.
    ///
    /// Percentiles index the sorted samples directly: p50 is `sorted[len / 2]`
    /// and p95 is `sorted[len * 95 / 100]`, with no interpolation.
    #[must_use]
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let len = sorted.len();
        let total: Duration = sorted.iter().sum();
        let mean = total / len as u32;

        Some(Self {
            samples: len,
            min_ns: nanos(sorted[0]),
            max_ns: nanos(sorted[len - 1]),
            mean_ns: nanos(mean),
            p50_ns: nanos(sorted[len / 2]),
            p95_ns: nanos(sorted[len * 95 / 100]),
        })
    }

    #[must_use]
    pub fn min(&self) -> Duration {
        Duration::from_nanos(self.min_ns)
    }

    #[must_use]
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns)
    }

    #[must_use]
    pub fn p50(&self) -> Duration {
        Duration::from_nanos(self.p50_ns)
    }

    #[must_use]
    pub fn p95(&self) -> Duration {
        Duration::from_nanos(self.p95_ns)
    }
}

fn nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
