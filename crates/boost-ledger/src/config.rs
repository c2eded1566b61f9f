//! Ledger configuration.
//!
//! [`LedgerConfig`] has usable defaults and can be layered from an optional
//! TOML file and `BOOST_`-prefixed environment variables
//! (e.g. `BOOST_LOG_LEVEL=debug`, `BOOST_MAX_BOOST_DURATION=604800`).

use std::path::Path;

use boost_core::constants::MAX_BOOST_DURATION;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BOOST";

/// Configuration for a ledger instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Log level filter string (e.g. "info", "debug", "boost_ledger=trace").
    pub log_level: String,
    /// Log output format: "text" or "json".
    pub log_format: String,
    /// Shortest accepted boost window, in seconds.
    pub min_boost_duration: u64,
    /// Longest accepted boost window, in seconds.
    pub max_boost_duration: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            min_boost_duration: 0,
            max_boost_duration: MAX_BOOST_DURATION,
        }
    }
}

impl LedgerConfig {
    /// Load from an optional config file, then environment overrides, then validate.
    ///
    /// A missing file is not an error; defaults fill every unset field.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        let cfg: LedgerConfig = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_boost_duration >= self.max_boost_duration {
            return Err(ConfigError::InvalidDurations {
                min: self.min_boost_duration,
                max: self.max_boost_duration,
            });
        }
        match self.log_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}
