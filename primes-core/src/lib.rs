#![no_std]

//! Primes Core - Sieve of Eratosthenes engine
//!
//! This crate provides the pure computation behind prime listing: bound
//! validation and parsing, the marking-array abstraction, the sieve itself
//! and the space-separated listing format. It performs no I/O.
//!
//! The allocating entry points (`sieve`, `sieve_packed`, `try_sieve`,
//! `BitArray`) require the `alloc` feature. Without it, `sieve_into` can
//! still run over a caller-provided `[bool]` buffer. The allocating items are
//! always compiled under `cfg(test)`, so `cargo test -p primes-core` covers
//! them without extra flags.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod bounds;
pub mod error;
pub mod listing;
pub mod marking;
pub mod parsing;
pub mod sieve;

pub use bounds::{capacity_hint, isqrt, validate_bound, DEFAULT_BOUND, MAX_BOUND};
pub use error::*;
pub use listing::write_listing;
pub use marking::MarkingArray;
#[cfg(any(feature = "alloc", test))]
pub use marking::BitArray;
pub use parsing::parse_bound;
pub use sieve::{sieve_into, Marking};
#[cfg(any(feature = "alloc", test))]
pub use sieve::{sieve, sieve_packed, sieve_with, try_sieve};
