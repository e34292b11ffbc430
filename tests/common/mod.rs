//! Shared test utilities and fixtures
//!
//! Helpers for running the built binaries in an isolated environment.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub const FIB_BIN: &str = env!("CARGO_BIN_EXE_fib");
pub const PRIMES_BIN: &str = env!("CARGO_BIN_EXE_primes");
pub const RUNNER_BIN: &str = env!("CARGO_BIN_EXE_microbench");

/// Run `bin` with `args`, with `HOME` pointed at `home` so no user config leaks in.
pub fn run_in(home: &Path, bin: &str, args: &[&str]) -> Output {
    run_in_with_env(home, bin, args, &[])
}

/// Like [`run_in`], with extra environment variables set.
pub fn run_in_with_env(home: &Path, bin: &str, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .envs(envs.iter().copied())
        .current_dir(home)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

/// Run `bin` with no arguments in a scratch home directory.
pub fn run(bin: &str) -> Output {
    let home = tempfile::tempdir().unwrap();
    run_in(home.path(), bin, &[])
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
