//! Application configuration model.

use crate::error::{DcaError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable names that override `config.toml`.
pub mod env_keys {
    pub const API_BASE_URL: &str = "DCA_API_BASE_URL";
    pub const DEV_SHORTCUTS: &str = "DCA_DEV_SHORTCUTS";
    pub const FALLBACK_ON_EMPTY: &str = "DCA_FALLBACK_ON_EMPTY";
    pub const REQUEST_TIMEOUT_SECS: &str = "DCA_REQUEST_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "DCA_LOG_LEVEL";
}

/// Root of `config.toml`. Every field has a default, so an empty or missing
/// file yields a working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the `admin/cases`, `dca/cases` and `login` paths hang off.
    pub api_base_url: String,
    /// Accept the built-in development credentials without contacting the
    /// authentication service. Disable for production builds.
    pub dev_shortcuts: bool,
    /// Treat a successful but empty case list as a failure and show mock data.
    pub fallback_on_empty: bool,
    /// Per-request timeout. `None` waits for the transport to give up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            dev_shortcuts: true,
            fallback_on_empty: false,
            request_timeout_secs: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Applies overrides from `lookup` (normally `std::env::var`).
    ///
    /// Unset variables leave the field untouched; unparseable values are a
    /// configuration error.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env_keys::API_BASE_URL) {
            self.api_base_url = url;
        }
        if let Some(value) = lookup(env_keys::DEV_SHORTCUTS) {
            self.dev_shortcuts = parse_bool(env_keys::DEV_SHORTCUTS, &value)?;
        }
        if let Some(value) = lookup(env_keys::FALLBACK_ON_EMPTY) {
            self.fallback_on_empty = parse_bool(env_keys::FALLBACK_ON_EMPTY, &value)?;
        }
        if let Some(value) = lookup(env_keys::REQUEST_TIMEOUT_SECS) {
            let secs = value.trim().parse::<u64>().map_err(|_| {
                DcaError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_keys::REQUEST_TIMEOUT_SECS,
                    value
                ))
            })?;
            self.request_timeout_secs = Some(secs);
        }
        if let Some(level) = lookup(env_keys::LOG_LEVEL) {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DcaError::config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(DcaError::config(
                "request_timeout_secs must be at least 1; omit it to disable the timeout",
            ));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DcaError::config(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}
