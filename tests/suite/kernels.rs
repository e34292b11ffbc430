//! Kernel properties through the public library API

use microbench_core::{count_primes_below, fibonacci, is_prime};

#[test]
fn fibonacci_recurrence_through_thirty_five() {
    let values: Vec<u64> = (0..=35).map(fibonacci).collect();

    assert_eq!(values[0], 0);
    assert_eq!(values[1], 1);
    for k in 2..=35 {
        assert_eq!(values[k], values[k - 1] + values[k - 2], "F({k})");
    }
    assert_eq!(values[10], 55);
    assert_eq!(values[20], 6765);
    assert_eq!(values[35], 9_227_465);
}

#[test]
fn primality_edge_cases() {
    assert!((-50..=1).all(|n| !is_prime(n)));
    assert!(is_prime(2));
    assert!((3..500).filter(|n| n % 2 == 0).all(|n| !is_prime(n)));
    assert!(!is_prime(9));
    assert!(is_prime(11));
    assert!(is_prime(97));
}

#[test]
fn prime_count_matches_sieve() {
    let bound = 10_000_usize;
    let mut composite = vec![false; bound];
    let mut sieve_count = 0;
    for n in 2..bound {
        if composite[n] {
            continue;
        }
        sieve_count += 1;
        for multiple in (n * n..bound).step_by(n) {
            composite[multiple] = true;
        }
    }

    assert_eq!(count_primes_below(bound as i64), sieve_count);
    assert_eq!(sieve_count, 1229);
}
