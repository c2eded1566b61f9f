//! Trait interfaces for the boost ledger.
//!
//! These traits define the contracts between crates:
//! - [`Clock`]: source of the current time (boost-core implements)
//! - [`DecayCalculator`]: boost decay math (boost-decay implements)
//! - [`BoostStore`]: record and mint-counter storage (boost-ledger implements)

use crate::types::{Account, Amount, BoostRecord, Timestamp, TokenId};

/// Source of the current logical time.
///
/// Production reads the wall clock; tests substitute a manually driven clock
/// so boundary timestamps can be hit exactly.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Pure computation of a boost's remaining value.
///
/// Implemented by the decay engine (boost-decay).
pub trait DecayCalculator: Send + Sync {
    /// Value remaining at `now` of `amount` issued at `issue_time` that
    /// reaches zero at `expire_time`.
    ///
    /// Must be non-increasing in `now`, equal to `amount` at or before
    /// `issue_time`, and zero at or after `expire_time`.
    fn remaining(
        &self,
        amount: Amount,
        issue_time: Timestamp,
        expire_time: Timestamp,
        now: Timestamp,
    ) -> Amount;

    /// Current value of a stored boost.
    ///
    /// Default implementation: zero once canceled, otherwise
    /// [`remaining`](Self::remaining) over the record's window.
    fn boost_value(&self, record: &BoostRecord, now: Timestamp) -> Amount {
        if record.canceled {
            return 0;
        }
        self.remaining(record.amount, record.issue_time, record.expire_time, now)
    }
}

/// Mutable storage of boost records and per-delegator mint counters.
///
/// Not thread-safe; callers serialize access (see `SharedLedger`).
pub trait BoostStore: Send + Sync {
    /// Look up a record. Returns `None` if never created or purged.
    fn get(&self, id: &TokenId) -> Option<&BoostRecord>;

    /// Mutable access to a stored record.
    fn get_mut(&mut self, id: &TokenId) -> Option<&mut BoostRecord>;

    /// Whether a record is stored under `id`.
    ///
    /// Default implementation delegates to [`get`](Self::get).
    fn contains(&self, id: &TokenId) -> bool {
        self.get(id).is_some()
    }

    /// Store a record, replacing any previous one under the same id.
    fn insert(&mut self, id: TokenId, record: BoostRecord);

    /// Purge a record, returning it if present.
    fn remove(&mut self, id: &TokenId) -> Option<BoostRecord>;

    /// Number of boosts ever minted by `delegator`.
    fn minted(&self, delegator: &Account) -> u64;

    /// Overwrite the mint counter of `delegator`.
    fn set_minted(&mut self, delegator: &Account, count: u64);

    /// Borrowing iterator over all stored records, in unspecified order.
    fn iter(&self) -> impl Iterator<Item = (&TokenId, &BoostRecord)>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
