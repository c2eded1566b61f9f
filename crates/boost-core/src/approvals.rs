//! Operator approvals: the "may act on behalf of" relation.
//!
//! A pair `(owner, operator)` lets `operator` pass every permission check
//! that would otherwise require `owner` itself. The relation is directed
//! (approving someone grants them nothing in reverse) and the owner may
//! revoke it at any time. Authenticating that the caller really is the
//! owner happens at the boundary, not here.

use std::collections::{HashMap, HashSet};

use crate::types::Account;

/// Directed owner → operators relation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorApprovals {
    operators: HashMap<Account, HashSet<Account>>,
}

impl OperatorApprovals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or revoke `operator` for `owner`. Idempotent.
    ///
    /// Returns `true` if the relation changed.
    pub fn set_approval(&mut self, owner: &Account, operator: &Account, approved: bool) -> bool {
        if approved {
            return self.operators.entry(*owner).or_default().insert(*operator);
        }
        let Some(set) = self.operators.get_mut(owner) else {
            return false;
        };
        let removed = set.remove(operator);
        if set.is_empty() {
            self.operators.remove(owner);
        }
        removed
    }

    /// Whether `operator` is approved to act for `owner`.
    pub fn is_approved(&self, owner: &Account, operator: &Account) -> bool {
        self.operators
            .get(owner)
            .is_some_and(|set| set.contains(operator))
    }

    /// Whether `caller` is `owner` itself or one of its operators.
    pub fn acts_for(&self, owner: &Account, caller: &Account) -> bool {
        owner == caller || self.is_approved(owner, caller)
    }

    /// All operators currently approved by `owner`, sorted.
    pub fn operators_of(&self, owner: &Account) -> Vec<Account> {
        let mut ops: Vec<Account> = self
            .operators
            .get(owner)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default();
        ops.sort();
        ops
    }

    /// Number of `(owner, operator)` pairs.
    pub fn len(&self) -> usize {
        self.operators.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
