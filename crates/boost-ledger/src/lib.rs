//! # boost-ledger - Boost ledger composition.
//!
//! Composes the boost-core building blocks into a working ledger:
//! - [`ledger::BoostLedger`]: records, decay queries, and permission-checked mutations
//! - [`storage::MemoryBoostStore`]: in-memory [`BoostStore`](boost_core::traits::BoostStore)
//! - [`shared::SharedLedger`]: single-writer wrapper for multi-threaded hosts
//! - [`config::LedgerConfig`]: ledger configuration
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod shared;
pub mod storage;

pub use config::LedgerConfig;
pub use error::ConfigError;
pub use ledger::BoostLedger;
pub use shared::SharedLedger;
pub use storage::MemoryBoostStore;

/// Serializes unit tests that read or write the process environment.
#[cfg(test)]
pub(crate) static TEST_ENV_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
