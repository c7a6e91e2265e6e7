//! Trial-division primality test.
//!
//! Values on the spiral never exceed the grid capacity, so trial division up
//! to the square root is cheap enough to run once per step.

/// Decide whether `n` is prime.
///
/// Checks 2 directly, rejects other even numbers, then tries every odd
/// divisor `d` with `d * d <= n`.
///
/// # Examples
///
/// ```
/// use ulam_core::is_prime;
///
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// ```
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3;
    // d <= n / d avoids overflowing d * d near u64::MAX
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
