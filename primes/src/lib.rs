//! Primes - Sieve of Eratosthenes with reporting
//!
//! This library lists every prime up to an inclusive bound and writes the
//! result as a space-separated line or as JSON.
//!
//! ## Architecture
//!
//! - **primes-core**: the sieve, bound validation and listing format (no I/O)
//! - **primes**: timing, output to `std::io` writers and the `primes` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use primes::{sieve, try_sieve, SieveError};
//!
//! assert_eq!(sieve(10), vec![2, 3, 5, 7]);
//! assert_eq!(try_sieve(-1), Err(SieveError::NegativeBound));
//! ```
//!
//! ## Features
//!
//! - **serde** (default): JSON reports via `serde_json`
//! - **cli** (default): the `primes` command-line binary

// Re-export the core engine
pub use primes_core::{
    // Sieve entry points
    sieve, sieve_into, sieve_packed, sieve_with, try_sieve, Marking,
    // Marking arrays
    BitArray, MarkingArray,
    // Bounds and parsing
    capacity_hint, isqrt, parse_bound, validate_bound, DEFAULT_BOUND, MAX_BOUND,
    // Output format
    write_listing,
    // Error handling
    ErrorCategory, Result, SieveError,
};

pub mod report;

pub use report::SieveReport;
