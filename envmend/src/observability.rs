//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for ENVMEND_QUIET, LOG_LEVEL, LOG_JSON.

use envmend_core::config::ObservabilityConfig;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call at process startup.
/// When ENVMEND_QUIET=1, only WARN and above are logged.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level: String = if cfg.quiet {
        "envmend=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
