//! microbench runner - times the Fibonacci and prime-counting workloads.
//!
//! # Commands
//!
//! ```text
//! microbench run [WORKLOAD...]      timed runs, text or JSON report
//! microbench verify                 fixed inputs once, checked against known results
//! microbench list                   workloads and their default inputs
//! ```
//!
//! Settings resolve as command-line flag, then config file
//! (`--config` or `~/.microbench/config.toml`), then built-in default.

use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use microbench_cli::{Overrides, RunPlan, init_tracing};
use microbench_config::BenchConfig;
use microbench_core::{BenchReport, run_workload, verify_benchmarks};
use microbench_types::WorkloadKind;
use microbench_utils::atomic_write;

#[derive(Parser)]
#[command(name = "microbench", version)]
#[command(about = "Run and time the Fibonacci and prime-counting micro-benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time one or both workloads
    Run(RunArgs),
    /// Run both fixed benchmarks once and check their known results
    Verify,
    /// List workloads and their default inputs
    List,
}

#[derive(Args)]
struct RunArgs {
    /// Workloads to run: fibonacci (fib) or primes. Runs both when omitted.
    #[arg(value_name = "WORKLOAD")]
    workloads: Vec<WorkloadKind>,
    /// Timed iterations per workload
    #[arg(long)]
    iterations: Option<u32>,
    /// Untimed iterations before timing starts
    #[arg(long)]
    warmup: Option<u32>,
    /// Fibonacci input
    #[arg(long)]
    n: Option<u32>,
    /// Exclusive upper bound for the prime count
    #[arg(long, allow_hyphen_values = true)]
    bound: Option<i64>,
    /// Config file to use instead of ~/.microbench/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the report as JSON instead of one line per workload
    #[arg(long)]
    json: bool,
    /// Also write the JSON report to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(&args),
        Commands::Verify => verify(),
        Commands::List => list(),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<BenchConfig> {
    if let Some(path) = explicit {
        return BenchConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    // A broken default config is logged and ignored rather than blocking runs.
    match BenchConfig::load() {
        Ok(config) => Ok(config.unwrap_or_default()),
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring default config, using built-in defaults");
            Ok(BenchConfig::default())
        }
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let overrides = Overrides {
        iterations: args.iterations,
        warmup: args.warmup,
        n: args.n,
        bound: args.bound,
    };
    let kinds = if args.workloads.is_empty() {
        WorkloadKind::ALL.to_vec()
    } else {
        args.workloads.clone()
    };
    let plan = RunPlan::resolve(&config, &overrides, &kinds);
    tracing::info!(
        iterations = plan.settings.iterations,
        warmup = plan.settings.warmup,
        workloads = plan.workloads.len(),
        "Starting run"
    );

    let reports = plan
        .workloads
        .iter()
        .map(|workload| {
            run_workload(workload, &plan.settings)
                .with_context(|| format!("failed to run {workload}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let report = BenchReport::new(reports);

    let mut out = stdout().lock();
    if args.json {
        writeln!(out, "{}", report.to_json_pretty()?)?;
    } else {
        for entry in &report.workloads {
            writeln!(out, "{entry}")?;
        }
    }
    out.flush()?;

    if let Some(path) = args.report.as_deref().or(config.report_path()) {
        let mut json = report.to_json_pretty()?;
        json.push('\n');
        atomic_write(path, json.as_bytes())
            .with_context(|| format!("failed to write report {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
    }

    Ok(())
}

fn verify() -> Result<()> {
    let reports = verify_benchmarks().context("benchmark verification failed")?;

    let mut out = stdout().lock();
    for report in &reports {
        writeln!(out, "ok  {} = {}", report.workload, report.result)?;
    }
    out.flush()?;
    Ok(())
}

fn list() -> Result<()> {
    let mut out = stdout().lock();
    for kind in WorkloadKind::ALL {
        writeln!(
            out,
            "{:<10} {:<16} {}",
            kind.as_str(),
            kind.benchmark().to_string(),
            kind.description()
        )?;
    }
    out.flush()?;
    Ok(())
}
