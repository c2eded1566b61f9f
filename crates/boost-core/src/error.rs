//! Error types for the boost ledger.
//!
//! The display strings of [`BoostError::NotFound`], [`BoostError::TooEarly`]
//! and [`BoostError::Unauthorized`] are part of the external contract and
//! must not change.
use thiserror::Error;

use crate::types::Timestamp;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoostError {
    #[error("dev: token does not exist")] NotFound,
    #[error("dev: must wait for cancel time")] TooEarly,
    #[error("Not allowed!")] Unauthorized,
    #[error("dev: token exists")] AlreadyExists,
    #[error("dev: no token index left for delegator")] IndexExhausted,
    #[error("dev: invalid boost window (issue {issue}, cancel {cancel}, expire {expire})")]
    InvalidWindow { issue: Timestamp, cancel: Timestamp, expire: Timestamp },
    #[error("dev: boost duration {duration}s outside [{min}s, {max}s]")]
    InvalidDuration { duration: u64, min: u64, max: u64 },
    #[error("dev: only delegator or operator")] NotDelegator,
    #[error("dev: only receiver or operator")] NotReceiver,
    #[error("dev: new expiration must be greater than old token expiry")] ExpiryDecreased,
    #[error("dev: new cancel time must be greater than old token cancel time")] CancelTimeDecreased,
    #[error("dev: cannot reduce value of boost")] ValueDecreased,
    #[error("dev: boost is no longer active")] Inactive,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("invalid length: {0} bytes")] InvalidLength(usize),
}
