//! Standalone benchmark binaries: one line on stdout, exit status zero

use std::process::Command;

use crate::common::{FIB_BIN, PRIMES_BIN, run, stdout_of};

#[test]
fn fib_prints_fibonacci_of_35() {
    let output = run(FIB_BIN);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9227465\n");
}

#[test]
fn primes_prints_count_below_10000() {
    let output = run(PRIMES_BIN);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1229\n");
}

#[test]
fn repeated_runs_are_identical() {
    for bin in [FIB_BIN, PRIMES_BIN] {
        let first = stdout_of(&run(bin));
        let second = stdout_of(&run(bin));
        assert_eq!(first, second, "{bin}");
    }
}

#[test]
fn arguments_are_ignored() {
    let output = Command::new(PRIMES_BIN).arg("--bound").arg("10").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1229\n");
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let output = Command::new(FIB_BIN).env("RUST_LOG", "debug").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9227465\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Computed fibonacci"));
}
