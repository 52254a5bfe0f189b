//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use mnemo_core::config::ObservabilityConfig;
use mnemo_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global subscriber once per process.
///
/// `MNEMO_LOG` takes precedence over `config.log_level`. Later calls are
/// no-ops, as is a call made after another subscriber was installed.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// Initialize tracing with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .try_init();
    });
}
