//! Ledger-level error types.

use thiserror::Error;

/// Configuration loading and validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to load config: {0}")] Load(String),
    #[error("min boost duration {min}s must be below max {max}s")] InvalidDurations { min: u64, max: u64 },
    #[error("unknown log format: {0}")] InvalidLogFormat(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Load(e.to_string())
    }
}
