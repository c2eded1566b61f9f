//! Criterion benchmarks for boost-decay.
//!
//! Covers: linear interpolation with small and extreme magnitudes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boost_core::constants::YEAR;
use boost_core::traits::DecayCalculator;
use boost_core::types::Timestamp;
use boost_decay::LinearDecay;

fn bench_remaining(c: &mut Criterion) {
    let engine = LinearDecay::new();
    let issue = Timestamp::new(0);
    let expire = Timestamp::new(4 * YEAR);
    let now = Timestamp::new(YEAR + 12_345);

    c.bench_function("remaining_1e24", |b| {
        b.iter(|| {
            engine.remaining(
                black_box(10u128.pow(24)),
                black_box(issue),
                black_box(expire),
                black_box(now),
            )
        })
    });

    c.bench_function("remaining_u128_max", |b| {
        b.iter(|| {
            engine.remaining(
                black_box(u128::MAX),
                black_box(issue),
                black_box(expire),
                black_box(now),
            )
        })
    });
}

criterion_group!(benches, bench_remaining);
criterion_main!(benches);
