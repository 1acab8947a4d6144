//! Sieve of Eratosthenes
//!
//! The marking phase walks `i` over `2..=isqrt(n)`, reporting each surviving
//! `i` as prime and clearing its multiples from `i * i`. The collection phase
//! then reports the survivors above `isqrt(n)`. Both phases ascend and the
//! first only yields values `<= isqrt(n)`, so the output is sorted.

use crate::bounds::isqrt;
use crate::marking::MarkingArray;

#[cfg(any(feature = "alloc", test))]
use crate::{bounds::capacity_hint, bounds::validate_bound, marking::BitArray, Result, MAX_BOUND};
#[cfg(any(feature = "alloc", test))]
use alloc::{vec, vec::Vec};

/// Marking array representation used by [`sieve_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Marking {
    /// One `bool` per index
    #[default]
    Bool,
    /// One bit per index
    Packed,
}

impl core::fmt::Display for Marking {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Marking::Bool => write!(f, "bool"),
            Marking::Packed => write!(f, "packed"),
        }
    }
}

/// Sieve over a caller-supplied marking array
///
/// The bound is `marks.len() - 1` and every index must start out marked
/// candidate. Calls `emit` once per prime, in ascending order. Indices 0 and
/// 1 are never emitted regardless of their flags. Does not allocate.
pub fn sieve_into<M, F>(marks: &mut M, mut emit: F)
where
    M: MarkingArray + ?Sized,
    F: FnMut(usize),
{
    if marks.len() < 3 {
        return;
    }

    let n = marks.len() - 1;
    let limit = isqrt(n);

    // i <= isqrt(n) so i * i <= n cannot overflow
    for i in 2..=limit {
        if marks.is_candidate(i) {
            emit(i);
            for multiple in (i * i..=n).step_by(i) {
                marks.mark_composite(multiple);
            }
        }
    }

    for i in limit + 1..=n {
        if marks.is_candidate(i) {
            emit(i);
        }
    }
}

/// List all primes not exceeding `n`
///
/// # Panics
///
/// Panics if `n` exceeds [`MAX_BOUND`](crate::MAX_BOUND), before anything
/// is allocated. Use [`try_sieve`] to get an error instead.
#[cfg(any(feature = "alloc", test))]
pub fn sieve(n: usize) -> Vec<usize> {
    assert_bound(n);
    let mut marks = vec![true; n + 1];
    collect(marks.as_mut_slice(), n)
}

/// List all primes not exceeding `n` using a packed [`BitArray`]
///
/// # Panics
///
/// Panics if `n` exceeds [`MAX_BOUND`](crate::MAX_BOUND).
#[cfg(any(feature = "alloc", test))]
pub fn sieve_packed(n: usize) -> Vec<usize> {
    assert_bound(n);
    let mut marks = BitArray::with_candidates(n + 1);
    collect(&mut marks, n)
}

/// List all primes not exceeding `n` with the chosen representation
#[cfg(any(feature = "alloc", test))]
pub fn sieve_with(n: usize, marking: Marking) -> Vec<usize> {
    match marking {
        Marking::Bool => sieve(n),
        Marking::Packed => sieve_packed(n),
    }
}

/// Validate a signed bound, then list all primes not exceeding it
///
/// Fails with `NegativeBound` or `BoundTooLarge` before anything is
/// allocated.
#[cfg(any(feature = "alloc", test))]
pub fn try_sieve(n: i64) -> Result<Vec<usize>> {
    let bound = validate_bound(n)?;
    Ok(sieve(bound))
}

// n + 1 must not wrap to an empty marking array
#[cfg(any(feature = "alloc", test))]
fn assert_bound(n: usize) {
    assert!(n <= MAX_BOUND, "bound {n} exceeds MAX_BOUND ({MAX_BOUND})");
}

#[cfg(any(feature = "alloc", test))]
fn collect<M: MarkingArray + ?Sized>(marks: &mut M, n: usize) -> Vec<usize> {
    let mut primes = Vec::with_capacity(capacity_hint(n));
    sieve_into(marks, |p| primes.push(p));
    primes
}
