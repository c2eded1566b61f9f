//! The boost ledger.
//!
//! [`BoostLedger`] owns the boost records (through a [`BoostStore`]), the
//! operator relation, a [`Clock`], and a [`DecayCalculator`]. Every mutating
//! call runs all of its checks against the current state before touching
//! anything, so a call either commits completely or returns an error with
//! the ledger unchanged.
//!
//! Record lifecycle:
//!
//! ```text
//! create ──► Active ──(now >= expire)──► Expired
//!              │                            │
//!              └──── cancel_boost ──────────┴──► Canceled (terminal, still queryable)
//!
//! burn_boost (receiver side) purges the record from any state.
//! ```

use std::sync::Arc;

use boost_core::approvals::OperatorApprovals;
use boost_core::error::BoostError;
use boost_core::permission::{PermissionGate, Phase, Role};
use boost_core::token;
use boost_core::traits::{BoostStore, Clock, DecayCalculator};
use boost_core::types::{Account, Amount, BoostRecord, BoostTerms, Timestamp, TokenId};
use boost_decay::LinearDecay;
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;

/// Boost records plus the rules for creating, extending, canceling and burning them.
pub struct BoostLedger<S: BoostStore, C: Clock> {
    store: S,
    approvals: OperatorApprovals,
    clock: C,
    decay: Arc<dyn DecayCalculator>,
    min_duration: u64,
    max_duration: u64,
}

impl<S: BoostStore, C: Clock> BoostLedger<S, C> {
    /// Create a ledger with default limits and linear decay.
    pub fn new(store: S, clock: C) -> Self {
        Self::with_config(store, clock, &LedgerConfig::default())
    }

    /// Create a ledger using the duration limits from `config`.
    pub fn with_config(store: S, clock: C, config: &LedgerConfig) -> Self {
        Self {
            store,
            approvals: OperatorApprovals::new(),
            clock,
            decay: Arc::new(LinearDecay::new()),
            min_duration: config.min_boost_duration,
            max_duration: config.max_boost_duration,
        }
    }

    /// Replace the decay engine.
    pub fn with_decay(mut self, decay: Arc<dyn DecayCalculator>) -> Self {
        self.decay = decay;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn approvals(&self) -> &OperatorApprovals {
        &self.approvals
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    // ------------------------------------------------------------------
    // Token registry
    // ------------------------------------------------------------------

    /// Token id of the `index`-th boost of `delegator`. Pure; the id need not exist.
    pub fn get_token_id(&self, delegator: &Account, index: u64) -> TokenId {
        token::derive_id(delegator, index)
    }

    /// Inverse of [`get_token_id`](Self::get_token_id).
    pub fn decode_token_id(&self, id: &TokenId) -> Option<(Account, u64)> {
        token::decode_id(id)
    }

    /// Whether a record exists for `id` (canceled records still exist; burned ones do not).
    pub fn exists(&self, id: &TokenId) -> bool {
        self.store.contains(id)
    }

    /// Number of boosts ever minted by `delegator`; the next free sequential index.
    pub fn total_minted(&self, delegator: &Account) -> u64 {
        self.store.minted(delegator)
    }

    fn record(&self, id: &TokenId) -> Result<&BoostRecord, BoostError> {
        self.store.get(id).ok_or(BoostError::NotFound)
    }

    fn check_duration(&self, from: Timestamp, expire: Timestamp) -> Result<(), BoostError> {
        let duration = expire.saturating_since(from);
        if duration < self.min_duration || duration > self.max_duration {
            return Err(BoostError::InvalidDuration {
                duration,
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Create a boost under the explicit `index` of `delegator`.
    ///
    /// # Errors
    ///
    /// - [`BoostError::InvalidWindow`] if the terms violate `issue < expire`
    ///   or `issue <= cancel <= expire`
    /// - [`BoostError::InvalidDuration`] if the window is outside the configured limits
    /// - [`BoostError::AlreadyExists`] if `(delegator, index)` is already in use
    pub fn create_boost(
        &mut self,
        delegator: &Account,
        receiver: &Account,
        terms: BoostTerms,
        index: u64,
    ) -> Result<TokenId, BoostError> {
        let record = BoostRecord::new(*delegator, *receiver, terms)?;
        self.check_duration(terms.issue_time, terms.expire_time)?;

        let id = token::derive_id(delegator, index);
        if self.store.contains(&id) {
            return Err(BoostError::AlreadyExists);
        }

        self.store.insert(id, record);
        let minted = self.store.minted(delegator).max(index.saturating_add(1));
        self.store.set_minted(delegator, minted);

        info!(
            token = %id,
            %delegator,
            %receiver,
            amount = terms.amount,
            issue = terms.issue_time.as_secs(),
            cancel = terms.cancel_time.as_secs(),
            expire = terms.expire_time.as_secs(),
            "boost created"
        );
        Ok(id)
    }

    /// Create a boost at the delegator's next sequential index.
    ///
    /// The counter saturates at `u64::MAX`. Once a boost occupies that last
    /// index, sequential minting for the delegator is over; lower free
    /// indices stay reachable through [`create_boost`](Self::create_boost).
    ///
    /// # Errors
    ///
    /// - [`BoostError::IndexExhausted`] if the last index is already taken
    /// - any error of [`create_boost`](Self::create_boost)
    pub fn mint_boost(
        &mut self,
        delegator: &Account,
        receiver: &Account,
        terms: BoostTerms,
    ) -> Result<TokenId, BoostError> {
        let index = self.store.minted(delegator);
        if index == u64::MAX && self.store.contains(&token::derive_id(delegator, index)) {
            return Err(BoostError::IndexExhausted);
        }
        self.create_boost(delegator, receiver, terms, index)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current decayed value of a boost. Zero once canceled or expired.
    pub fn token_boost(&self, id: &TokenId) -> Result<Amount, BoostError> {
        let record = self.record(id)?;
        let value = self.decay.boost_value(record, self.clock.now());
        debug!(token = %id, value, "token boost");
        Ok(value)
    }

    /// A copy of the stored record.
    pub fn boost(&self, id: &TokenId) -> Result<BoostRecord, BoostError> {
        self.record(id).cloned()
    }

    pub fn token_expiry(&self, id: &TokenId) -> Result<Timestamp, BoostError> {
        Ok(self.record(id)?.expire_time)
    }

    pub fn token_cancel_time(&self, id: &TokenId) -> Result<Timestamp, BoostError> {
        Ok(self.record(id)?.cancel_time)
    }

    /// The time phase of a boost at the current time.
    pub fn phase(&self, id: &TokenId) -> Result<Phase, BoostError> {
        Ok(Phase::at(self.record(id)?, self.clock.now()))
    }

    /// How the cancellation policy classifies `caller` for this boost.
    pub fn role(&self, id: &TokenId, caller: &Account) -> Result<Role, BoostError> {
        Ok(Role::classify(self.record(id)?, caller, &self.approvals))
    }

    /// Sum of the current value of every boost received by `receiver`.
    pub fn received_boost(&self, receiver: &Account) -> Amount {
        self.sum_where(|rec| rec.receiver == *receiver)
    }

    /// Sum of the current value of every boost delegated by `delegator`.
    pub fn delegated_boost(&self, delegator: &Account) -> Amount {
        self.sum_where(|rec| rec.delegator == *delegator)
    }

    fn sum_where(&self, pred: impl Fn(&BoostRecord) -> bool) -> Amount {
        let now = self.clock.now();
        self.store
            .iter()
            .filter(|(_, rec)| pred(rec))
            .map(|(_, rec)| self.decay.boost_value(rec, now))
            .fold(0, Amount::saturating_add)
    }

    // ------------------------------------------------------------------
    // Cancellation
    // ------------------------------------------------------------------

    fn check_cancel(
        &self,
        id: &TokenId,
        caller: &Account,
        now: Timestamp,
    ) -> Result<(), BoostError> {
        let record = self.record(id)?;
        PermissionGate::check_cancel(record, caller, now, &self.approvals).inspect_err(|e| {
            warn!(
                token = %id,
                %caller,
                role = %Role::classify(record, caller, &self.approvals),
                phase = %Phase::at(record, now),
                error = %e,
                "cancel denied"
            );
        })
    }

    fn commit_cancel(&mut self, id: &TokenId, caller: &Account) {
        if let Some(record) = self.store.get_mut(id) {
            record.canceled = true;
            info!(token = %id, %caller, "boost canceled");
        }
    }

    /// Cancel a boost, zeroing its value permanently.
    ///
    /// Canceling an already-canceled boost is permission-checked like any
    /// other call and then succeeds without further effect.
    ///
    /// # Errors
    ///
    /// - [`BoostError::NotFound`] if the token does not exist
    /// - [`BoostError::TooEarly`] for the delegator side before `cancel_time`
    /// - [`BoostError::Unauthorized`] for third parties before `expire_time`
    pub fn cancel_boost(&mut self, id: &TokenId, caller: &Account) -> Result<(), BoostError> {
        let now = self.clock.now();
        self.check_cancel(id, caller, now)?;
        self.commit_cancel(id, caller);
        Ok(())
    }

    /// Cancel several boosts, all or nothing.
    ///
    /// Every id is checked against the same `now` before any is canceled;
    /// the first failure aborts the whole batch.
    pub fn batch_cancel_boosts(
        &mut self,
        ids: &[TokenId],
        caller: &Account,
    ) -> Result<(), BoostError> {
        let now = self.clock.now();
        for id in ids {
            self.check_cancel(id, caller, now)?;
        }
        for id in ids {
            self.commit_cancel(id, caller);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Extension and burning
    // ------------------------------------------------------------------

    /// Re-issue a live boost at the current time with new terms.
    ///
    /// The expiry and cancel time may only move later and the boost's value
    /// may not drop. A cancel time already in the past is carried forward to
    /// `now`, which leaves the delegator's cancel right unchanged.
    ///
    /// # Errors
    ///
    /// - [`BoostError::NotFound`] if the token does not exist
    /// - [`BoostError::NotDelegator`] unless called by the delegator side
    /// - [`BoostError::Inactive`] if the boost is canceled or expired
    /// - [`BoostError::ExpiryDecreased`], [`BoostError::CancelTimeDecreased`],
    ///   [`BoostError::ValueDecreased`] for terms weaker than the current ones
    /// - [`BoostError::InvalidWindow`], [`BoostError::InvalidDuration`] for a malformed window
    pub fn extend_boost(
        &mut self,
        id: &TokenId,
        caller: &Account,
        amount: Amount,
        expire_time: Timestamp,
        cancel_time: Timestamp,
    ) -> Result<(), BoostError> {
        let now = self.clock.now();
        let record = self.record(id)?;
        PermissionGate::check_extend(record, caller, &self.approvals)?;
        if !record.is_live(now) {
            return Err(BoostError::Inactive);
        }
        if expire_time < record.expire_time {
            return Err(BoostError::ExpiryDecreased);
        }
        if cancel_time < record.cancel_time {
            return Err(BoostError::CancelTimeDecreased);
        }
        if amount < self.decay.boost_value(record, now) {
            return Err(BoostError::ValueDecreased);
        }

        let terms = BoostTerms {
            amount,
            issue_time: now,
            expire_time,
            cancel_time: cancel_time.max(now),
        };
        let extended = BoostRecord::new(record.delegator, record.receiver, terms)?;
        self.check_duration(now, expire_time)?;

        self.store.insert(*id, extended);
        info!(
            token = %id,
            %caller,
            amount,
            cancel = terms.cancel_time.as_secs(),
            expire = expire_time.as_secs(),
            "boost extended"
        );
        Ok(())
    }

    /// Purge a boost. Afterwards the id reports [`BoostError::NotFound`].
    ///
    /// # Errors
    ///
    /// - [`BoostError::NotFound`] if the token does not exist
    /// - [`BoostError::NotReceiver`] unless called by the receiver side
    pub fn burn_boost(&mut self, id: &TokenId, caller: &Account) -> Result<(), BoostError> {
        let record = self.record(id)?;
        PermissionGate::check_burn(record, caller, &self.approvals)?;
        self.store.remove(id);
        info!(token = %id, %caller, "boost burned");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Operator approvals
    // ------------------------------------------------------------------

    /// Grant or revoke `operator` for `owner`. The caller must already be
    /// authenticated as `owner`.
    pub fn set_approval_for_all(&mut self, owner: &Account, operator: &Account, approved: bool) {
        if self.approvals.set_approval(owner, operator, approved) {
            info!(%owner, %operator, approved, "operator approval changed");
        }
    }

    pub fn is_approved_for_all(&self, owner: &Account, operator: &Account) -> bool {
        self.approvals.is_approved(owner, operator)
    }
}
