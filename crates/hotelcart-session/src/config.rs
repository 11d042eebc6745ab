//! # Session Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HOTELCART_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use hotelcart_core::{Money, PICKER_INIT_DELAY};
use serde::{Deserialize, Serialize};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Currency symbol prefixed to every price label.
    pub currency_symbol: String,

    /// Milliseconds between entering edit mode and attaching the date pickers.
    pub picker_delay_ms: u64,

    /// Theme preference file. `None` uses the platform config directory.
    pub prefs_path: Option<PathBuf>,

    /// Ambient "prefers dark" signal from the host environment.
    pub prefers_dark: bool,

    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SessionConfig {
    /// Returns defaults suitable for development.
    ///
    /// ## Default Values
    /// - Currency: `$`
    /// - Picker delay: 50 ms
    /// - Preference file: platform config directory
    /// - Ambient theme: light
    /// - Log filter: `info,hotelcart_session=debug`
    fn default() -> Self {
        SessionConfig {
            currency_symbol: "$".to_string(),
            picker_delay_ms: u64::try_from(PICKER_INIT_DELAY.as_millis()).unwrap_or(50),
            prefs_path: None,
            prefers_dark: false,
            log_filter: "info,hotelcart_session=debug".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a SessionConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `HOTELCART_CURRENCY_SYMBOL`: Override currency symbol
    /// - `HOTELCART_PICKER_DELAY_MS`: Override picker delay (integer ms)
    /// - `HOTELCART_PREFS_PATH`: Preference file location
    /// - `HOTELCART_PREFERS_DARK`: `1`/`true` when the host prefers dark
    /// - `HOTELCART_LOG`: Default log filter
    ///
    /// Unparseable values are ignored and the default kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(symbol) = lookup("HOTELCART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("HOTELCART_PICKER_DELAY_MS") {
            if let Ok(ms) = delay.trim().parse::<u64>() {
                config.picker_delay_ms = ms;
            }
        }

        if let Some(path) = lookup("HOTELCART_PREFS_PATH") {
            config.prefs_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("HOTELCART_PREFERS_DARK") {
            config.prefers_dark = matches!(flag.trim(), "1" | "true" | "yes");
        }

        if let Some(filter) = lookup("HOTELCART_LOG") {
            config.log_filter = filter;
        }

        config
    }

    pub fn picker_delay(&self) -> Duration {
        Duration::from_millis(self.picker_delay_ms)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::Money;
    /// use hotelcart_session::config::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(config.format_currency(Money::from_whole(1940)), "$1940");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.picker_delay(), Duration::from_millis(50));
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.prefers_dark);
    }

    #[test]
    fn test_env_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("HOTELCART_CURRENCY_SYMBOL", "€"),
            ("HOTELCART_PICKER_DELAY_MS", "120"),
            ("HOTELCART_PREFERS_DARK", "true"),
            ("HOTELCART_PREFS_PATH", "/tmp/prefs.json"),
        ]));

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.picker_delay(), Duration::from_millis(120));
        assert!(config.prefers_dark);
        assert_eq!(config.prefs_path, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_bad_delay_keeps_default() {
        let config = SessionConfig::from_lookup(lookup(&[("HOTELCART_PICKER_DELAY_MS", "soon")]));
        assert_eq!(config.picker_delay_ms, 50);
    }

    #[test]
    fn test_format_currency() {
        let config = SessionConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::zero()), "$0");
    }
}
