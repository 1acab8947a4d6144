//! Timed sieve runs and their output
//!
//! A `SieveReport` captures one run of the sieve together with how long it
//! took, and knows how to write itself as a listing line or as JSON.

use primes_core::{sieve_with, write_listing, Marking};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Result of sieving up to one bound
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SieveReport {
    /// Inclusive upper bound
    pub bound: usize,
    /// Marking array representation used
    pub marking: Marking,
    /// Number of primes found
    pub count: usize,
    /// Primes in ascending order
    pub primes: Vec<usize>,
    /// Wall-clock time spent sieving, in microseconds
    pub elapsed_micros: u64,
}

impl SieveReport {
    /// Sieve up to `bound` and record the elapsed time
    pub fn run(bound: usize, marking: Marking) -> Self {
        let start = Instant::now();
        let primes = sieve_with(bound, marking);
        let elapsed = start.elapsed();

        Self {
            bound,
            marking,
            count: primes.len(),
            primes,
            elapsed_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }

    /// Get the time spent sieving
    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_micros)
    }

    /// Write the primes as one space-separated line
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        // Longest prime plus separator, an upper bound per entry
        let width = self.bound.checked_ilog10().unwrap_or(0) as usize + 2;
        let mut line = String::with_capacity(self.count * width);
        write_listing(&mut line, &self.primes).map_err(io::Error::other)?;
        writeln!(out, "{line}")
    }

    /// Write the whole report as a single line of JSON
    #[cfg(feature = "serde")]
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_reference_bound() {
        let report = SieveReport::run(47, Marking::Bool);
        assert_eq!(report.bound, 47);
        assert_eq!(report.count, 15);
        assert_eq!(report.primes.last(), Some(&47));
        assert_eq!(report.elapsed(), Duration::from_micros(report.elapsed_micros));
    }

    #[test]
    fn test_write_text() {
        let report = SieveReport::run(47, Marking::Packed);
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 \n"
        );
    }

    #[test]
    fn test_write_text_empty() {
        for bound in [0, 1] {
            let report = SieveReport::run(bound, Marking::Bool);
            let mut out = Vec::new();
            report.write_text(&mut out).unwrap();
            assert_eq!(out, b"\n");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_write_json() {
        let report = SieveReport::run(10, Marking::Packed);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["bound"], 10);
        assert_eq!(value["marking"], "packed");
        assert_eq!(value["count"], 4);
        assert_eq!(value["primes"], serde_json::json!([2, 3, 5, 7]));
        assert!(value["elapsed_micros"].is_u64());
        assert_eq!(out.last(), Some(&b'\n'));
    }
}
