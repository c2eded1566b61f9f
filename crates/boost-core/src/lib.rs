//! # boost-core
//! Foundation types, traits, and permission rules for the boost ledger.

pub mod approvals;
pub mod clock;
pub mod constants;
pub mod error;
pub mod permission;
pub mod token;
pub mod traits;
pub mod types;
