/// F(n) by naive double recursion.
///
/// No memoization: the call overhead is the workload. F(0) = 0, F(1) = 1.
/// Inputs above 93 overflow `u64`.
#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
