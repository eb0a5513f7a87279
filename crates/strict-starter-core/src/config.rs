//! Runtime configuration options.

use crate::error::{Result, StarterError};
use crate::retry::{DEFAULT_BASE_DELAY, ExponentialBackoff};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "STARTER_DEBUG";
/// Environment variable holding the timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "STARTER_TIMEOUT_MS";
/// Environment variable holding the retry count.
pub const RETRIES_ENV: &str = "STARTER_RETRIES";

/// Common configuration options.
///
/// Serialized with the timeout in whole milliseconds:
///
/// ```
/// use strict_starter_core::config::ConfigOptions;
/// use std::time::Duration;
///
/// let config = ConfigOptions::from_json_str(r#"{"debug": true, "timeout": 2500}"#).unwrap();
/// assert!(config.debug);
/// assert_eq!(config.timeout, Duration::from_millis(2500));
/// assert_eq!(config.retries, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOptions {
    /// Enable debug-level logging
    pub debug: bool,

    /// Per-operation timeout, in whole milliseconds
    #[serde(with = "millis")]
    pub timeout: Duration,

    /// Retries after the first failed attempt
    pub retries: u32,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            debug: false,
            timeout: Duration::from_secs(30),
            retries: 3,
        }
    }
}

impl ConfigOptions {
    /// Set the debug flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry count.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `STARTER_DEBUG` (`true`/`false`/`1`/`0`)
    /// - `STARTER_TIMEOUT_MS` for the timeout in milliseconds
    /// - `STARTER_RETRIES` for the retry count
    ///
    /// Unset variables keep their defaults. With the `env` feature a `.env`
    /// file is loaded first, if present.
    pub fn from_env() -> Result<Self> {
        #[cfg(feature = "env")]
        {
            let _ = dotenvy::dotenv();
        }

        let mut config = Self::default();

        if let Some(debug) = read_var(DEBUG_ENV, parse_flag)? {
            config.debug = debug;
        }

        if let Some(timeout_ms) = read_var(TIMEOUT_ENV, u64::from_str)? {
            config.timeout = Duration::from_millis(timeout_ms);
        }

        if let Some(retries) = read_var(RETRIES_ENV, u32::from_str)? {
            config.retries = retries;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options for values no caller could use.
    ///
    /// The timeout must be a non-zero whole number of milliseconds, since
    /// that is the unit it is read and written in.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(StarterError::config("timeout", "must be greater than zero"));
        }
        if self.timeout.subsec_nanos() % 1_000_000 != 0 {
            return Err(StarterError::config(
                "timeout",
                "must be a whole number of milliseconds",
            ));
        }
        Ok(())
    }

    /// The retry policy these options describe: `retries` retries of
    /// doubling backoff from the default base delay.
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::doubling(self.retries, DEFAULT_BASE_DELAY)
    }

    /// The `tracing` filter directive matching the debug flag.
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn read_var<T, E, P>(key: &str, parse: P) -> Result<Option<T>>
where
    P: Fn(&str) -> std::result::Result<T, E>,
    E: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => parse(raw.trim())
            .map(Some)
            .map_err(|e| StarterError::config(key, format!("{e} (got {raw:?})"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(StarterError::config(key, "value is not valid unicode"))
        }
    }
}

fn parse_flag(raw: &str) -> std::result::Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, found {other:?}")),
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::BackoffStrategy;

    fn without_vars<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset([DEBUG_ENV, TIMEOUT_ENV, RETRIES_ENV], f)
    }

    #[test]
    fn test_defaults() {
        let config = ConfigOptions::default();
        assert!(!config.debug);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retries, 3);
    }

    #[test]
    fn test_from_env_without_vars_uses_defaults() {
        let config = without_vars(ConfigOptions::from_env).unwrap();
        assert_eq!(config, ConfigOptions::default());
    }

    #[test]
    fn test_from_env_overrides() {
        let config = temp_env::with_vars(
            [
                (DEBUG_ENV, Some("TRUE")),
                (TIMEOUT_ENV, Some(" 1500 ")),
                (RETRIES_ENV, Some("5")),
            ],
            ConfigOptions::from_env,
        )
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.retries, 5);
    }

    #[test]
    fn test_from_env_rejects_bad_retries() {
        let err = temp_env::with_vars(
            [
                (DEBUG_ENV, None),
                (TIMEOUT_ENV, None),
                (RETRIES_ENV, Some("many")),
            ],
            ConfigOptions::from_env,
        )
        .unwrap_err();

        match err {
            StarterError::Config { key, message } => {
                assert_eq!(key, RETRIES_ENV);
                assert!(message.contains("\"many\""), "{message}");
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_env_rejects_zero_timeout() {
        let err = temp_env::with_vars(
            [
                (DEBUG_ENV, None),
                (TIMEOUT_ENV, Some("0")),
                (RETRIES_ENV, None),
            ],
            ConfigOptions::from_env,
        )
        .unwrap_err();
        assert_eq!(
            err,
            StarterError::config("timeout", "must be greater than zero")
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("On"), Ok(true));
        assert_eq!(parse_flag("0"), Ok(false));
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_json_round_trip_uses_millis() {
        let config = ConfigOptions::default()
            .with_debug(true)
            .with_timeout(Duration::from_millis(750))
            .with_retries(1);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "debug": true, "timeout": 750, "retries": 1 })
        );
        assert_eq!(ConfigOptions::from_json_str(&value.to_string()).unwrap(), config);
    }

    #[test]
    fn test_sub_millisecond_timeout_is_rejected() {
        let config = ConfigOptions::default().with_timeout(Duration::from_micros(750_500));
        assert_eq!(
            config.validate(),
            Err(StarterError::config(
                "timeout",
                "must be a whole number of milliseconds"
            ))
        );
        assert!(
            ConfigOptions::default()
                .with_timeout(Duration::from_millis(750))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ConfigOptions::from_json_str(r#"{"retries": -1}"#).unwrap_err();
        assert!(matches!(err, StarterError::Json(_)));
    }

    #[test]
    fn test_backoff_follows_retries() {
        let backoff = ConfigOptions::default().with_retries(4).backoff();
        assert_eq!(backoff.max_retries(), 4);
        assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
        assert_eq!(backoff.next_delay(3), Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_log_level() {
        assert_eq!(ConfigOptions::default().log_level(), "info");
        assert_eq!(ConfigOptions::default().with_debug(true).log_level(), "debug");
    }
}
