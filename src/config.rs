//! Client configuration baked in at build time.
//!
//! Values come from the build environment through `option_env!`, because a
//! WASM bundle has no process environment at runtime. Invalid values fall
//! back to defaults with a warning instead of failing hydration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while parsing config values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL was empty after trimming.
    #[error("api base must not be empty")]
    EmptyApiBase,

    /// The notification duration was not a positive integer.
    #[error("invalid notification duration: {0}")]
    NotificationMs(String),

    /// The log level name was not recognized.
    #[error("invalid log level: {0}")]
    LogLevel(String),
}

/// Typed client settings, provided to components via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for backend endpoints, without a trailing slash.
    pub api_base: String,
    /// How long a transient notification stays visible.
    pub notification_ms: u64,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `PANTRY_API_BASE`: default `/api`
    /// - `PANTRY_NOTIFICATION_MS`: default 3000
    /// - `PANTRY_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_env() -> Self {
        match Self::from_values(
            option_env!("PANTRY_API_BASE"),
            option_env!("PANTRY_NOTIFICATION_MS"),
            option_env!("PANTRY_LOG_LEVEL"),
        ) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("client config rejected, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first value that failed to parse.
    pub fn from_values(
        api_base: Option<&str>,
        notification_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            notification_ms: parse_notification_ms(notification_ms)?,
            log_level: parse_log_level(log_level)?,
        })
    }

    /// Join an endpoint path onto the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiBase);
    }
    Ok(trimmed.to_owned())
}

fn parse_notification_ms(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(DEFAULT_NOTIFICATION_MS),
        Some(value) => match value.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Ok(ms),
            _ => Err(ConfigError::NotificationMs(value.to_owned())),
        },
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => log::Level::from_str(value.trim()).map_err(|_| ConfigError::LogLevel(value.to_owned())),
    }
}
