//! Criterion benchmarks for boost-ledger.
//!
//! Covers: token_boost reads and create+cancel write cycles.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use boost_core::clock::ManualClock;
use boost_core::constants::{ACCOUNT_LEN, YEAR};
use boost_core::types::{Account, BoostTerms, Timestamp};
use boost_ledger::{BoostLedger, MemoryBoostStore};

fn terms() -> BoostTerms {
    BoostTerms {
        amount: 10u128.pow(24),
        issue_time: Timestamp::new(0),
        expire_time: Timestamp::new(4 * YEAR),
        cancel_time: Timestamp::new(2 * YEAR),
    }
}

fn bench_token_boost(c: &mut Criterion) {
    let mut ledger = BoostLedger::new(
        MemoryBoostStore::new(),
        ManualClock::new(Timestamp::new(YEAR)),
    );
    let delegator = Account([1; ACCOUNT_LEN]);
    let receiver = Account([2; ACCOUNT_LEN]);
    let ids: Vec<_> = (0..1_000)
        .map(|_| ledger.mint_boost(&delegator, &receiver, terms()).unwrap())
        .collect();

    c.bench_function("token_boost", |b| {
        b.iter(|| ledger.token_boost(black_box(&ids[500])))
    });

    c.bench_function("received_boost_1000", |b| {
        b.iter(|| ledger.received_boost(black_box(&receiver)))
    });
}

fn bench_create_cancel(c: &mut Criterion) {
    let delegator = Account([1; ACCOUNT_LEN]);
    let receiver = Account([2; ACCOUNT_LEN]);

    c.bench_function("create_then_cancel", |b| {
        b.iter_batched(
            || BoostLedger::new(MemoryBoostStore::new(), ManualClock::default()),
            |mut ledger| {
                let id = ledger.mint_boost(&delegator, &receiver, terms()).unwrap();
                ledger.cancel_boost(&id, &receiver).unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_token_boost, bench_create_cancel);
criterion_main!(benches);
