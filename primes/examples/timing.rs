//! How long does it take to list all primes up to one million?
//!
//! Repeats the sieve for each marking representation, keeps the best time,
//! and checks that both representations produce the same primes.

use primes::{Marking, SieveReport};
use std::time::Duration;

const BOUND: usize = 1_000_000;
const REPEAT: usize = 100;

fn best_of(marking: Marking) -> (Duration, Vec<usize>) {
    let mut best = Duration::MAX;
    let mut primes = Vec::new();

    for _ in 0..REPEAT {
        let report = SieveReport::run(BOUND, marking);
        best = best.min(report.elapsed());
        primes = report.primes;
    }

    (best, primes)
}

fn main() {
    println!("Sieving up to {BOUND}, best of {REPEAT}");

    let (bool_time, bool_primes) = best_of(Marking::Bool);
    println!("  bool marking:   {bool_time:.2?} ({} primes)", bool_primes.len());

    let (packed_time, packed_primes) = best_of(Marking::Packed);
    println!("  packed marking: {packed_time:.2?} ({} primes)", packed_primes.len());

    println!(
        "Packed is {:.2}x the speed of bool",
        bool_time.as_secs_f64() / packed_time.as_secs_f64().max(f64::EPSILON)
    );

    if bool_primes == packed_primes {
        println!("Both representations agree");
    } else {
        eprintln!("Representations disagree!");
        std::process::exit(1);
    }
}
