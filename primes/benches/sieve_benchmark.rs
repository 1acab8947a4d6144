use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use primes::{sieve_with, Marking};

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for bound in [10_000usize, 100_000, 1_000_000] {
        for marking in [Marking::Bool, Marking::Packed] {
            group.bench_with_input(
                BenchmarkId::new(marking.to_string(), bound),
                &bound,
                |b, &bound| b.iter(|| sieve_with(black_box(bound), marking)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sieve);
criterion_main!(benches);
