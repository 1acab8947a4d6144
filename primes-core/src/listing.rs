//! Space-separated listing of primes
//!
//! Each value is written followed by a single space, so a non-empty
//! listing ends in a trailing space. No newline is written.

use core::fmt::Write;

/// Write `primes` as `"2 3 5 "` to any `core::fmt::Write` sink
pub fn write_listing<W: Write + ?Sized>(out: &mut W, primes: &[usize]) -> core::fmt::Result {
    for p in primes {
        write!(out, "{p} ")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_write_listing() {
        let mut out = String::new();
        write_listing(&mut out, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]).unwrap();
        assert_eq!(out, "2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 ");
    }

    #[test]
    fn test_write_listing_edge_cases() {
        let mut out = String::new();
        write_listing(&mut out, &[]).unwrap();
        assert_eq!(out, "");

        write_listing(&mut out, &[2]).unwrap();
        assert_eq!(out, "2 ");
    }
}
