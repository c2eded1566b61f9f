//! Core ledger types: accounts, timestamps, token ids, boost records.
//!
//! All boost magnitudes are `u128` so that 18-decimal token amounts
//! (e.g. `10^24`) fit without scaling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{ACCOUNT_LEN, TOKEN_ID_LEN};
use crate::error::{AccountError, BoostError};

/// Boost magnitude.
pub type Amount = u128;

/// A 20-byte account address.
///
/// Displayed and parsed as `0x`-prefixed lowercase hex.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Account(pub [u8; ACCOUNT_LEN]);

impl Account {
    /// The zero address.
    pub const ZERO: Self = Self([0u8; ACCOUNT_LEN]);

    pub fn from_bytes(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ACCOUNT_LEN]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Account {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AccountError::InvalidHex(e.to_string()))?;
        let arr: [u8; ACCOUNT_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AccountError::InvalidLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl From<[u8; ACCOUNT_LEN]> for Account {
    fn from(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }
}

/// A Unix timestamp in seconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Time zero.
    pub const EPOCH: Self = Self(0);

    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds from `earlier` to `self`, zero if `earlier` is later.
    pub fn saturating_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// `self + secs`, or `None` on overflow.
    pub fn checked_add(&self, secs: u64) -> Option<Timestamp> {
        self.0.checked_add(secs).map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}

/// A 256-bit boost token identifier.
///
/// See [`crate::token`] for the derivation from `(delegator, index)`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TokenId(pub [u8; TOKEN_ID_LEN]);

impl TokenId {
    pub fn from_bytes(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// The economic terms of a boost: magnitude and time window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoostTerms {
    /// Value of the boost at `issue_time`.
    pub amount: Amount,
    pub issue_time: Timestamp,
    /// Time at which the value reaches zero.
    pub expire_time: Timestamp,
    /// Earliest time the delegator side may cancel unilaterally.
    pub cancel_time: Timestamp,
}

impl BoostTerms {
    /// Check `issue < expire` and `issue <= cancel <= expire`.
    pub fn validate(&self) -> Result<(), BoostError> {
        let ordered = self.issue_time < self.expire_time
            && self.issue_time <= self.cancel_time
            && self.cancel_time <= self.expire_time;
        if ordered {
            Ok(())
        } else {
            Err(BoostError::InvalidWindow {
                issue: self.issue_time,
                cancel: self.cancel_time,
                expire: self.expire_time,
            })
        }
    }

    /// Length of the decay window in seconds.
    pub fn duration(&self) -> u64 {
        self.expire_time.saturating_since(self.issue_time)
    }
}

/// One delegation of decaying boost from a delegator to a receiver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BoostRecord {
    pub delegator: Account,
    pub receiver: Account,
    pub amount: Amount,
    pub issue_time: Timestamp,
    pub expire_time: Timestamp,
    pub cancel_time: Timestamp,
    /// Terminal flag. A canceled record reports zero boost forever.
    pub canceled: bool,
}

impl BoostRecord {
    /// Build an active record from validated terms.
    pub fn new(
        delegator: Account,
        receiver: Account,
        terms: BoostTerms,
    ) -> Result<Self, BoostError> {
        terms.validate()?;
        Ok(Self {
            delegator,
            receiver,
            amount: terms.amount,
            issue_time: terms.issue_time,
            expire_time: terms.expire_time,
            cancel_time: terms.cancel_time,
            canceled: false,
        })
    }

    pub fn terms(&self) -> BoostTerms {
        BoostTerms {
            amount: self.amount,
            issue_time: self.issue_time,
            expire_time: self.expire_time,
            cancel_time: self.cancel_time,
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expire_time
    }

    /// Neither canceled nor expired at `now`.
    pub fn is_live(&self, now: Timestamp) -> bool {
        !self.canceled && !self.is_expired(now)
    }
}
