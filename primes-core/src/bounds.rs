//! Bound validation and sizing for the sieve
//!
//! Pure integer arithmetic: no floating point is used for the square root
//! boundary, so perfect squares such as 49 are never truncated to 6.

use crate::{Result, SieveError};

/// Bound used when the caller does not supply one
pub const DEFAULT_BOUND: usize = 47;

/// Largest bound whose marking array of `n + 1` entries is addressable
pub const MAX_BOUND: usize = isize::MAX as usize - 1;

/// Exact floor square root
///
/// Newton iteration starting from a power of two that is at least
/// `sqrt(n)`. Intermediate sums stay below `2^(BITS/2 + 1)`, so this is
/// overflow-free for every `usize`.
pub const fn isqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }

    let shift = (usize::BITS - n.leading_zeros()).div_ceil(2);
    let mut x: usize = 1 << shift;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Validate a signed bound and convert it to an index bound
pub fn validate_bound(n: i64) -> Result<usize> {
    if n < 0 {
        return Err(SieveError::NegativeBound);
    }

    let bound = usize::try_from(n).map_err(|_| SieveError::BoundTooLarge)?;
    if bound > MAX_BOUND {
        return Err(SieveError::BoundTooLarge);
    }

    Ok(bound)
}

/// Estimate the number of primes not exceeding `n`
///
/// Uses the prime number theorem, `n / ln(n)`, with the integer
/// approximation `ln(n) ≈ log2(n) * 693/1000`. Only a reservation hint for
/// the result vector; it may under- or overshoot.
pub fn capacity_hint(n: usize) -> usize {
    if n < 2 {
        return 0;
    }

    let log2 = n.ilog2() as usize;
    (n / log2).saturating_mul(1000) / 693 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(47), 6);
        assert_eq!(isqrt(48), 6);
        assert_eq!(isqrt(49), 7);
        assert_eq!(isqrt(50), 7);
    }

    #[test]
    fn test_isqrt_perfect_squares_and_neighbours() {
        for root in [2usize, 3, 7, 31, 1000, 65535, 1 << 20, 3_037_000_499] {
            let square = match root.checked_mul(root) {
                Some(square) => square,
                None => continue,
            };
            assert_eq!(isqrt(square), root);
            assert_eq!(isqrt(square - 1), root - 1);
            assert_eq!(isqrt(square + 1), root);
        }
    }

    #[test]
    fn test_isqrt_extremes() {
        let root = isqrt(usize::MAX);
        assert!(root.checked_mul(root).is_some());
        assert!((root + 1).checked_mul(root + 1).is_none());

        let root = isqrt(MAX_BOUND);
        assert!(root * root <= MAX_BOUND);
        assert!((root + 1) * (root + 1) > MAX_BOUND);
    }

    #[test]
    fn test_validate_bound() {
        assert_eq!(validate_bound(0), Ok(0));
        assert_eq!(validate_bound(47), Ok(47));
        assert_eq!(validate_bound(-1), Err(SieveError::NegativeBound));
        assert_eq!(validate_bound(i64::MIN), Err(SieveError::NegativeBound));

        if (i64::MAX as u64) > MAX_BOUND as u64 {
            assert_eq!(validate_bound(i64::MAX), Err(SieveError::BoundTooLarge));
        }
    }

    #[test]
    fn test_capacity_hint() {
        assert_eq!(capacity_hint(0), 0);
        assert_eq!(capacity_hint(1), 0);
        assert!(capacity_hint(2) >= 1);

        // pi(10^6) = 78498; the estimate should be in the right neighbourhood
        let hint = capacity_hint(1_000_000);
        assert!(hint > 60_000 && hint < 100_000, "hint = {hint}");
    }
}
