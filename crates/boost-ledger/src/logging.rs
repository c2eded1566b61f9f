//! Tracing subscriber setup.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Initialize the global tracing subscriber with the given level and format.
///
/// Pass `format = "json"` for structured JSON output; any other value selects
/// human-readable text. `RUST_LOG` overrides `level_str` when set.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_logging(level_str: &str, format: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true))
            .try_init()
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_noop() {
        let _env = crate::TEST_ENV_LOCK.lock();
        // The first call may lose a race with other tests in this binary;
        // the second can never succeed.
        let _ = init_logging("debug", "text");
        assert!(!init_logging("debug", "json"));
    }
}
