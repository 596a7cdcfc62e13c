//! Benchmarks for threatdb pattern generation
//!
//! Measures the per-record synthesis cost of each pattern family. File IO
//! is excluded; the full build is dominated by these hot loops plus one
//! buffered write per record.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use threatdb::patterns::{domain, phone, signature};

// =============================================================================
// Pattern Synthesis
// =============================================================================

fn pattern_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    group.bench_function("phone-pattern", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(phone::pattern(&mut rng)))
    });

    group.bench_function("domain-pattern", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(domain::pattern(&mut rng)))
    });

    group.bench_function("signature-sample", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(signature::sample(&mut rng)))
    });

    group.bench_function("signature-digest", |b| {
        b.iter(|| black_box(signature::digest(black_box("account locked_31337"))))
    });

    group.finish();
}

criterion_group!(benches, pattern_benchmarks);
criterion_main!(benches);
