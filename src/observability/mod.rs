//! # Observability Infrastructure
//!
//! Structured logging for the keybridge service via the tracing ecosystem.
//! The subscriber is installed once during startup; `RUST_LOG` overrides the
//! configured level when set.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{Error, Result};

/// Initialize the global tracing subscriber.
///
/// Uses an env-filter seeded from the configured log level and switches to
/// JSON output when `json_logging` is enabled. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if config.json_logging {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|err| Error::config(format!("Failed to initialize tracing: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent_enough_for_tests() {
        let config = ObservabilityConfig::default();
        // First call may succeed or fail depending on test ordering; a second
        // call must report the already-installed subscriber as a config error.
        let _ = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(second.is_err());
    }
}
