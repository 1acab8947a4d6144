//! Parsing of textual sieve bounds
//!
//! Accepts a plain decimal integer, optionally signed and surrounded by
//! whitespace. Fractions, exponents and hex are rejected rather than
//! truncated.

use crate::{Result, SieveError, MAX_BOUND};

/// Parse a bound such as `"47"` into an index bound
///
/// A leading `-` followed by nonzero digits is `NegativeBound` rather than
/// `NotAnInteger`. `-0` is zero and is accepted.
pub fn parse_bound(text: &str) -> Result<usize> {
    let text = text.trim();

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = parse_digits(digits)?;
    if negative && magnitude != 0 {
        return Err(SieveError::NegativeBound);
    }

    if magnitude > MAX_BOUND {
        return Err(SieveError::BoundTooLarge);
    }

    Ok(magnitude)
}

/// Parse an unsigned run of ASCII digits with per-digit overflow checks
fn parse_digits(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(SieveError::NotAnInteger);
    }

    let mut result: usize = 0;
    let mut overflowed = false;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SieveError::NotAnInteger);
        }

        let digit = (byte - b'0') as usize;
        match result.checked_mul(10).and_then(|r| r.checked_add(digit)) {
            Some(next) => result = next,
            // keep scanning so trailing garbage is still NotAnInteger
            None => overflowed = true,
        }
    }

    if overflowed {
        return Err(SieveError::BoundTooLarge);
    }

    Ok(result)
}
