/// Trial-division primality test.
///
/// Rejects `n <= 1` and even `n > 2`, then tries odd divisors 3, 5, 7, ...
/// while `i * i <= n`.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // Same bound as i * i <= n, without overflowing near i64::MAX.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Number of primes in `[2, bound)`. Zero when `bound <= 2`.
#[must_use]
pub fn count_primes_below(bound: i64) -> u64 {
    let mut count = 0;
    let mut n = 2;
    while n < bound {
        if is_prime(n) {
            count += 1;
        }
        n += 1;
    }
    count
}
