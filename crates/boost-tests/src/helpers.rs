//! Shared fixtures for the scenario tests.

use std::sync::Arc;

use boost_core::clock::ManualClock;
use boost_core::constants::{ACCOUNT_LEN, YEAR};
use boost_core::types::{Account, Amount, BoostTerms, Timestamp, TokenId};
use boost_ledger::{BoostLedger, MemoryBoostStore};

/// `10^24`, one million tokens with 18 decimals.
pub const BOOST_AMOUNT: Amount = 1_000_000_000_000_000_000_000_000;

pub const CANCEL_TIME: u64 = 2 * YEAR;
pub const EXPIRE_TIME: u64 = 4 * YEAR;

pub type TestLedger = BoostLedger<MemoryBoostStore, Arc<ManualClock>>;

/// Account from a seed byte.
pub fn account(seed: u8) -> Account {
    Account([seed; ACCOUNT_LEN])
}

pub fn alice() -> Account {
    account(0xa1)
}

pub fn bob() -> Account {
    account(0xb0)
}

pub fn charlie() -> Account {
    account(0xc4)
}

/// The standard boost: issued at 0, cancelable from 2 years, expiring at 4 years.
pub fn standard_terms() -> BoostTerms {
    BoostTerms {
        amount: BOOST_AMOUNT,
        issue_time: Timestamp::new(0),
        expire_time: Timestamp::new(EXPIRE_TIME),
        cancel_time: Timestamp::new(CANCEL_TIME),
    }
}

/// A fresh ledger at time zero plus a handle on its clock.
pub fn new_ledger() -> (TestLedger, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Timestamp::EPOCH));
    let ledger = BoostLedger::new(MemoryBoostStore::new(), Arc::clone(&clock));
    (ledger, clock)
}

/// A fresh ledger in which alice has boosted bob with [`standard_terms`] at index 0.
pub fn alice_boosts_bob() -> (TestLedger, Arc<ManualClock>, TokenId) {
    let (mut ledger, clock) = new_ledger();
    let id = ledger
        .create_boost(&alice(), &bob(), standard_terms(), 0)
        .expect("standard terms are valid");
    (ledger, clock, id)
}

/// Time reached after moving `pct` percent of the way from `from` to `to`.
pub fn percent_of_way(from: u64, to: u64, pct: u64) -> u64 {
    from + (to - from) * pct / 100
}
