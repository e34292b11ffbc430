//! Fixed-input prime-counting benchmark: prints the number of primes below 10000.

use anyhow::Result;

use microbench_cli::{init_tracing, print_result};
use microbench_core::count_primes_below;
use microbench_types::PRIME_COUNT_BENCHMARK_BOUND;

fn main() -> Result<()> {
    init_tracing();

    let count = count_primes_below(PRIME_COUNT_BENCHMARK_BOUND);
    tracing::debug!(bound = PRIME_COUNT_BENCHMARK_BOUND, count, "Counted primes");

    print_result(count)
}
