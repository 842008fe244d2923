//! Centralized configuration layer.
//!
//! All environment-variable reads live here; the rest of the code accesses
//! settings through the `from_env()` schema types instead of calling
//! `std::env::var` directly.

use std::env;

/// Environment variable keys.
pub mod env_keys {
    /// Dependency-installation root override (default: `node_modules`).
    pub const ENVMEND_ROOT: &str = "ENVMEND_ROOT";
    /// When truthy, only WARN and above are logged.
    pub const ENVMEND_QUIET: &str = "ENVMEND_QUIET";
    /// Tracing filter directive, e.g. `envmend=debug`.
    pub const ENVMEND_LOG_LEVEL: &str = "ENVMEND_LOG_LEVEL";
    /// When truthy, log lines are emitted as JSON.
    pub const ENVMEND_LOG_JSON: &str = "ENVMEND_LOG_JSON";
}

/// Read an environment variable, treating empty values as unset.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Read an environment variable, falling back to `default`.
pub fn env_or(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean environment variable: 0/false/no/off are false, any other
/// set value is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Patcher settings.
#[derive(Debug, Clone)]
pub struct PatchConfig {
    /// Dependency-installation root, if overridden.
    pub root: Option<String>,
}

impl PatchConfig {
    pub fn from_env() -> Self {
        Self {
            root: env_optional(env_keys::ENVMEND_ROOT),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(env_keys::ENVMEND_QUIET, false),
            log_level: env_or(env_keys::ENVMEND_LOG_LEVEL, "envmend=info"),
            log_json: env_bool(env_keys::ENVMEND_LOG_JSON, false),
        }
    }
}
