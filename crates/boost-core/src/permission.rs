//! Cancellation policy.
//!
//! The caller is classified into exactly one [`Role`] (receiver side wins
//! over delegator side) and the current time into one [`Phase`]; the pair is
//! then looked up in a fixed decision table:
//!
//! | Role \ Phase | PreCancel    | CancelWindow | PostExpiry |
//! |--------------|--------------|--------------|------------|
//! | Receiver     | allow        | allow        | allow      |
//! | Delegator    | TooEarly     | allow        | allow      |
//! | ThirdParty   | Unauthorized | Unauthorized | allow      |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::approvals::OperatorApprovals;
use crate::error::BoostError;
use crate::types::{Account, BoostRecord, Timestamp};

/// The caller's relation to a boost record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The receiver or one of its operators.
    Receiver,
    /// The delegator or one of its operators.
    Delegator,
    /// Anyone else.
    ThirdParty,
}

impl Role {
    /// Classify `caller` against `record`, highest privilege first.
    pub fn classify(record: &BoostRecord, caller: &Account, approvals: &OperatorApprovals) -> Self {
        if approvals.acts_for(&record.receiver, caller) {
            Role::Receiver
        } else if approvals.acts_for(&record.delegator, caller) {
            Role::Delegator
        } else {
            Role::ThirdParty
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Receiver => "receiver",
            Role::Delegator => "delegator",
            Role::ThirdParty => "third-party",
        };
        f.write_str(s)
    }
}

/// Where `now` falls in a record's window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// `now < cancel_time`
    PreCancel,
    /// `cancel_time <= now < expire_time`
    CancelWindow,
    /// `now >= expire_time`
    PostExpiry,
}

impl Phase {
    pub fn at(record: &BoostRecord, now: Timestamp) -> Self {
        if now >= record.expire_time {
            Phase::PostExpiry
        } else if now >= record.cancel_time {
            Phase::CancelWindow
        } else {
            Phase::PreCancel
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreCancel => "pre-cancel",
            Phase::CancelWindow => "cancel-window",
            Phase::PostExpiry => "post-expiry",
        };
        f.write_str(s)
    }
}

/// Pure authorization decisions for boost mutations.
pub struct PermissionGate;

impl PermissionGate {
    /// The decision table.
    pub fn decide(role: Role, phase: Phase) -> Result<(), BoostError> {
        match (role, phase) {
            (Role::Receiver, _) => Ok(()),
            (_, Phase::PostExpiry) => Ok(()),
            (Role::Delegator, Phase::CancelWindow) => Ok(()),
            (Role::Delegator, Phase::PreCancel) => Err(BoostError::TooEarly),
            (Role::ThirdParty, _) => Err(BoostError::Unauthorized),
        }
    }

    /// Check whether `caller` may cancel `record` at `now`.
    pub fn check_cancel(
        record: &BoostRecord,
        caller: &Account,
        now: Timestamp,
        approvals: &OperatorApprovals,
    ) -> Result<(), BoostError> {
        Self::decide(Role::classify(record, caller, approvals), Phase::at(record, now))
    }

    /// Boolean form of [`check_cancel`](Self::check_cancel).
    pub fn may_cancel(
        record: &BoostRecord,
        caller: &Account,
        now: Timestamp,
        approvals: &OperatorApprovals,
    ) -> bool {
        Self::check_cancel(record, caller, now, approvals).is_ok()
    }

    /// Only the delegator side may extend a boost.
    pub fn check_extend(
        record: &BoostRecord,
        caller: &Account,
        approvals: &OperatorApprovals,
    ) -> Result<(), BoostError> {
        if approvals.acts_for(&record.delegator, caller) {
            Ok(())
        } else {
            Err(BoostError::NotDelegator)
        }
    }

    /// Only the receiver side may burn (purge) a boost.
    pub fn check_burn(
        record: &BoostRecord,
        caller: &Account,
        approvals: &OperatorApprovals,
    ) -> Result<(), BoostError> {
        if approvals.acts_for(&record.receiver, caller) {
            Ok(())
        } else {
            Err(BoostError::NotReceiver)
        }
    }
}
