//! Fixed-input Fibonacci benchmark: prints F(35) by naive recursion.

use anyhow::Result;

use microbench_cli::{init_tracing, print_result};
use microbench_core::fibonacci;
use microbench_types::FIBONACCI_BENCHMARK_INPUT;

fn main() -> Result<()> {
    init_tracing();

    let value = fibonacci(FIBONACCI_BENCHMARK_INPUT);
    tracing::debug!(n = FIBONACCI_BENCHMARK_INPUT, value, "Computed fibonacci");

    print_result(value)
}
