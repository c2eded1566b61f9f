//! Single-writer access to a ledger from many threads.
//!
//! Each mutating call holds the write lock for its whole
//! check-then-commit sequence, so calls are totally ordered and every
//! permission decision sees the latest committed state.

use std::sync::Arc;

use boost_core::error::BoostError;
use boost_core::traits::{BoostStore, Clock};
use boost_core::types::{Account, Amount, BoostRecord, BoostTerms, Timestamp, TokenId};
use parking_lot::{RwLock, RwLockReadGuard};

use crate::ledger::BoostLedger;

/// A cloneable handle to a ledger behind a `RwLock`.
pub struct SharedLedger<S: BoostStore, C: Clock> {
    inner: Arc<RwLock<BoostLedger<S, C>>>,
}

impl<S: BoostStore, C: Clock> Clone for SharedLedger<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: BoostStore, C: Clock> SharedLedger<S, C> {
    pub fn new(ledger: BoostLedger<S, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Read access for queries not mirrored here.
    pub fn read(&self) -> RwLockReadGuard<'_, BoostLedger<S, C>> {
        self.inner.read()
    }

    pub fn create_boost(
        &self,
        delegator: &Account,
        receiver: &Account,
        terms: BoostTerms,
        index: u64,
    ) -> Result<TokenId, BoostError> {
        self.inner.write().create_boost(delegator, receiver, terms, index)
    }

    pub fn mint_boost(
        &self,
        delegator: &Account,
        receiver: &Account,
        terms: BoostTerms,
    ) -> Result<TokenId, BoostError> {
        self.inner.write().mint_boost(delegator, receiver, terms)
    }

    pub fn cancel_boost(&self, id: &TokenId, caller: &Account) -> Result<(), BoostError> {
        self.inner.write().cancel_boost(id, caller)
    }

    pub fn batch_cancel_boosts(&self, ids: &[TokenId], caller: &Account) -> Result<(), BoostError> {
        self.inner.write().batch_cancel_boosts(ids, caller)
    }

    pub fn extend_boost(
        &self,
        id: &TokenId,
        caller: &Account,
        amount: Amount,
        expire_time: Timestamp,
        cancel_time: Timestamp,
    ) -> Result<(), BoostError> {
        self.inner
            .write()
            .extend_boost(id, caller, amount, expire_time, cancel_time)
    }

    pub fn burn_boost(&self, id: &TokenId, caller: &Account) -> Result<(), BoostError> {
        self.inner.write().burn_boost(id, caller)
    }

    pub fn set_approval_for_all(&self, owner: &Account, operator: &Account, approved: bool) {
        self.inner.write().set_approval_for_all(owner, operator, approved);
    }

    pub fn is_approved_for_all(&self, owner: &Account, operator: &Account) -> bool {
        self.inner.read().is_approved_for_all(owner, operator)
    }

    pub fn token_boost(&self, id: &TokenId) -> Result<Amount, BoostError> {
        self.inner.read().token_boost(id)
    }

    pub fn boost(&self, id: &TokenId) -> Result<BoostRecord, BoostError> {
        self.inner.read().boost(id)
    }

    pub fn exists(&self, id: &TokenId) -> bool {
        self.inner.read().exists(id)
    }

    pub fn get_token_id(&self, delegator: &Account, index: u64) -> TokenId {
        self.inner.read().get_token_id(delegator, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBoostStore;
    use boost_core::clock::ManualClock;
    use boost_core::constants::{ACCOUNT_LEN, YEAR};
    use std::thread;

    fn acct(seed: u8) -> Account {
        Account([seed; ACCOUNT_LEN])
    }

    fn terms() -> BoostTerms {
        BoostTerms {
            amount: 1_000,
            issue_time: Timestamp::new(0),
            expire_time: Timestamp::new(YEAR),
            cancel_time: Timestamp::new(YEAR / 2),
        }
    }

    fn shared() -> SharedLedger<MemoryBoostStore, Arc<ManualClock>> {
        SharedLedger::new(BoostLedger::new(
            MemoryBoostStore::new(),
            Arc::new(ManualClock::default()),
        ))
    }

    #[test]
    fn clones_share_state() {
        let a = shared();
        let b = a.clone();
        let id = a.mint_boost(&acct(1), &acct(2), terms()).unwrap();
        assert!(b.exists(&id));
        b.cancel_boost(&id, &acct(2)).unwrap();
        assert_eq!(a.token_boost(&id).unwrap(), 0);
    }

    #[test]
    fn concurrent_mints_get_distinct_indices() {
        let ledger = shared();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let l = ledger.clone();
                thread::spawn(move || l.mint_boost(&acct(1), &acct(2), terms()).unwrap())
            })
            .collect();
        let mut ids: Vec<TokenId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(ledger.read().total_minted(&acct(1)), 8);
    }

    #[test]
    fn concurrent_cancels_are_serialized() {
        let ledger = shared();
        let id = ledger.mint_boost(&acct(1), &acct(2), terms()).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let l = ledger.clone();
                thread::spawn(move || l.cancel_boost(&id, &acct(2)))
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap().is_ok());
        }
        assert!(ledger.boost(&id).unwrap().canceled);
    }

    #[test]
    fn approvals_through_handle() {
        let ledger = shared();
        ledger.set_approval_for_all(&acct(2), &acct(3), true);
        assert!(ledger.is_approved_for_all(&acct(2), &acct(3)));
        let id = ledger.create_boost(&acct(1), &acct(2), terms(), 4).unwrap();
        assert_eq!(id, ledger.get_token_id(&acct(1), 4));
        ledger.burn_boost(&id, &acct(3)).unwrap();
        assert!(!ledger.exists(&id));
    }

    #[test]
    fn extend_and_batch_through_handle() {
        let ledger = shared();
        let a = ledger.mint_boost(&acct(1), &acct(2), terms()).unwrap();
        let b = ledger.mint_boost(&acct(1), &acct(2), terms()).unwrap();
        ledger
            .extend_boost(&a, &acct(1), 2_000, Timestamp::new(YEAR), Timestamp::new(YEAR / 2))
            .unwrap();
        assert_eq!(ledger.token_boost(&a).unwrap(), 2_000);
        ledger.batch_cancel_boosts(&[a, b], &acct(2)).unwrap();
        assert_eq!(ledger.token_boost(&b).unwrap(), 0);
    }
}
