//! Runner configuration for microbench.
//!
//! Only the `microbench` runner reads configuration. The standalone `fib` and
//! `primes` binaries always run their fixed inputs.
//!
//! ```toml
//! [runner]
//! iterations = 5
//! warmup = 1
//!
//! [fibonacci]
//! n = 35
//!
//! [primes]
//! bound = 10000
//!
//! [report]
//! path = "bench-report.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use microbench_types::{MAX_FIBONACCI_INPUT, Workload, WorkloadKind};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    pub runner: Option<RunnerConfig>,
    pub fibonacci: Option<FibonacciConfig>,
    pub primes: Option<PrimesConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Timed iterations per workload. Must be at least 1.
    pub iterations: Option<u32>,
    /// Untimed iterations before timing starts.
    pub warmup: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FibonacciConfig {
    pub n: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimesConfig {
    /// Exclusive upper bound.
    pub bound: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Where to write the JSON report. Relative paths resolve against the
    /// working directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to parse config: {0}")]
    Syntax(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl BenchConfig {
    /// Load the default config file, if there is one.
    ///
    /// A missing file is not an error; it yields `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load an explicitly named config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Syntax(source) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, source);
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }
            ConfigError::Invalid(reason) => {
                tracing::warn!("Invalid config at {:?}: {}", path, reason);
                ConfigError::Invalid(reason)
            }
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations() == Some(0) {
            return Err(ConfigError::Invalid(
                "runner.iterations must be at least 1".to_string(),
            ));
        }
        if let Some(n) = self.fibonacci_n()
            && n > MAX_FIBONACCI_INPUT
        {
            return Err(ConfigError::Invalid(format!(
                "fibonacci.n = {n} overflows u64 (maximum is {MAX_FIBONACCI_INPUT})"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn iterations(&self) -> Option<u32> {
        self.runner.as_ref().and_then(|runner| runner.iterations)
    }

    #[must_use]
    pub fn warmup(&self) -> Option<u32> {
        self.runner.as_ref().and_then(|runner| runner.warmup)
    }

    #[must_use]
    pub fn fibonacci_n(&self) -> Option<u32> {
        self.fibonacci.as_ref().and_then(|fib| fib.n)
    }

    #[must_use]
    pub fn primes_bound(&self) -> Option<i64> {
        self.primes.as_ref().and_then(|primes| primes.bound)
    }

    #[must_use]
    pub fn report_path(&self) -> Option<&Path> {
        self.report
            .as_ref()
            .and_then(|report| report.path.as_deref())
    }

    /// The workload for `kind`, with any configured input applied over the
    /// benchmark default.
    #[must_use]
    pub fn workload(&self, kind: WorkloadKind) -> Workload {
        match kind.benchmark() {
            Workload::Fibonacci { n } => Workload::Fibonacci {
                n: self.fibonacci_n().unwrap_or(n),
            },
            Workload::PrimeCount { bound } => Workload::PrimeCount {
                bound: self.primes_bound().unwrap_or(bound),
            },
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".microbench").join("config.toml"))
}
