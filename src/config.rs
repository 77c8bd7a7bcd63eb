//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so settings are
//! captured when the crate is compiled (`CAR_ADMIN_API_URL`,
//! `CAR_ADMIN_LOG_LEVEL`) and frozen into an [`AppConfig`] at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Base address used when `CAR_ADMIN_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Immutable settings shared by the whole application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API base address, without a trailing slash.
    pub api_base_url: String,
    /// Minimum level forwarded to the browser console.
    pub log_level: log::Level,
}

impl AppConfig {
    /// Resolve configuration from variables captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CAR_ADMIN_API_URL"), option_env!("CAR_ADMIN_LOG_LEVEL"))
    }

    /// Resolve configuration from optional raw values, applying defaults.
    #[must_use]
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Self {
            api_base_url: normalize_base_url(api_base_url),
            log_level: parse_log_level(log_level),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Strip trailing slashes so paths can always be appended with a leading `/`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| log::Level::from_str(value.trim()).ok())
        .unwrap_or(log::Level::Info)
}
