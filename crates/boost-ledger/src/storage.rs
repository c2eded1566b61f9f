//! In-memory boost storage.

use std::collections::HashMap;

use boost_core::traits::BoostStore;
use boost_core::types::{Account, BoostRecord, TokenId};

/// [`BoostStore`] backed by hash maps. One instance per ledger; nothing is global.
#[derive(Debug, Clone, Default)]
pub struct MemoryBoostStore {
    records: HashMap<TokenId, BoostRecord>,
    minted: HashMap<Account, u64>,
}

impl MemoryBoostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoostStore for MemoryBoostStore {
    fn get(&self, id: &TokenId) -> Option<&BoostRecord> {
        self.records.get(id)
    }

    fn get_mut(&mut self, id: &TokenId) -> Option<&mut BoostRecord> {
        self.records.get_mut(id)
    }

    fn insert(&mut self, id: TokenId, record: BoostRecord) {
        self.records.insert(id, record);
    }

    fn remove(&mut self, id: &TokenId) -> Option<BoostRecord> {
        self.records.remove(id)
    }

    fn minted(&self, delegator: &Account) -> u64 {
        self.minted.get(delegator).copied().unwrap_or(0)
    }

    fn set_minted(&mut self, delegator: &Account, count: u64) {
        self.minted.insert(*delegator, count);
    }

    fn iter(&self) -> impl Iterator<Item = (&TokenId, &BoostRecord)> {
        self.records.iter()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boost_core::constants::ACCOUNT_LEN;
    use boost_core::token::derive_id;
    use boost_core::types::{BoostTerms, Timestamp};

    fn acct(seed: u8) -> Account {
        Account([seed; ACCOUNT_LEN])
    }

    fn record() -> BoostRecord {
        BoostRecord::new(
            acct(1),
            acct(2),
            BoostTerms {
                amount: 10,
                issue_time: Timestamp::new(0),
                expire_time: Timestamp::new(10),
                cancel_time: Timestamp::new(5),
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_store() {
        let store = MemoryBoostStore::new();
        assert!(store.is_empty());
        assert!(!store.contains(&derive_id(&acct(1), 0)));
        assert_eq!(store.minted(&acct(1)), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut store = MemoryBoostStore::new();
        let id = derive_id(&acct(1), 0);
        store.insert(id, record());
        assert!(store.contains(&id));
        assert_eq!(store.get(&id), Some(&record()));
        assert_eq!(store.len(), 1);

        store.get_mut(&id).unwrap().canceled = true;
        assert!(store.get(&id).unwrap().canceled);

        let removed = store.remove(&id).unwrap();
        assert!(removed.canceled);
        assert!(!store.contains(&id));
        assert!(store.remove(&id).is_none());
    }

    #[test]
    fn mint_counters_are_per_delegator() {
        let mut store = MemoryBoostStore::new();
        store.set_minted(&acct(1), 3);
        assert_eq!(store.minted(&acct(1)), 3);
        assert_eq!(store.minted(&acct(2)), 0);
    }

    #[test]
    fn iter_visits_everything() {
        let mut store = MemoryBoostStore::new();
        store.insert(derive_id(&acct(1), 0), record());
        store.insert(derive_id(&acct(1), 1), record());
        let mut ids: Vec<TokenId> = store.iter().map(|(id, _)| *id).collect();
        ids.sort();
        assert_eq!(ids, vec![derive_id(&acct(1), 0), derive_id(&acct(1), 1)]);
    }
}
