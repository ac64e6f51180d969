//! Dashboard configuration, read from the environment.

use std::path::PathBuf;

use nursery_inventory::{LOW_STOCK_THRESHOLD, RECENT_ACTIVITY_LIMIT, StockThresholds};
use nursery_observability::LogFormat;

pub const ENV_SNAPSHOT_DIR: &str = "NURSERY_SNAPSHOT_DIR";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "NURSERY_LOW_STOCK_THRESHOLD";
pub const ENV_ACTIVITY_LIMIT: &str = "NURSERY_ACTIVITY_LIMIT";
pub const ENV_CURRENCY: &str = "NURSERY_CURRENCY";
pub const ENV_PLACEHOLDER_IMAGE: &str = "NURSERY_PLACEHOLDER_IMAGE";
pub const ENV_LOG_FORMAT: &str = "NURSERY_LOG_FORMAT";

pub const DEFAULT_SNAPSHOT_DIR: &str = "./data";
pub const DEFAULT_CURRENCY: &str = "KES";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "forest2.jpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Directory holding `categories.json`, `inventory.json` and `activities.json`.
    pub snapshot_dir: PathBuf,
    pub thresholds: StockThresholds,
    /// Entries shown in the recent-activity feed.
    pub activity_limit: usize,
    /// Currency code prefixed to money labels.
    pub currency: String,
    /// Image shown for seedlings without one.
    pub placeholder_image: String,
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            thresholds: StockThresholds::new(LOW_STOCK_THRESHOLD),
            activity_limit: RECENT_ACTIVITY_LIMIT,
            currency: DEFAULT_CURRENCY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

/// An environment value that could not be used; its default was taken instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl ConfigWarning {
    pub fn log(&self) {
        tracing::warn!(key = self.key, value = %self.value, reason = %self.reason, "invalid value; using default");
    }
}

impl DashboardConfig {
    /// Load from process environment variables.
    ///
    /// Warnings are returned rather than logged so the caller can install a
    /// subscriber (whose format is part of this config) first.
    pub fn load_env() -> (Self, Vec<ConfigWarning>) {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup and log any warnings immediately.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, warnings) = Self::load(lookup);
        warnings.iter().for_each(ConfigWarning::log);
        config
    }

    /// Load from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults; unparseable values also fall back to
    /// the default and are reported as warnings.
    pub fn load<F>(lookup: F) -> (Self, Vec<ConfigWarning>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let snapshot_dir = value(ENV_SNAPSHOT_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_dir);

        let low_stock_below = parse_or(
            ENV_LOW_STOCK_THRESHOLD,
            value(ENV_LOW_STOCK_THRESHOLD),
            defaults.thresholds.low_stock_below,
            &mut warnings,
        );

        let activity_limit = parse_or(
            ENV_ACTIVITY_LIMIT,
            value(ENV_ACTIVITY_LIMIT),
            defaults.activity_limit,
            &mut warnings,
        );

        let log_format = match value(ENV_LOG_FORMAT) {
            Some(raw) => match raw.parse() {
                Ok(format) => format,
                Err(reason) => {
                    warnings.push(ConfigWarning {
                        key: ENV_LOG_FORMAT,
                        value: raw,
                        reason,
                    });
                    defaults.log_format
                }
            },
            None => defaults.log_format,
        };

        let config = Self {
            snapshot_dir,
            thresholds: StockThresholds::new(low_stock_below),
            activity_limit,
            currency: value(ENV_CURRENCY).unwrap_or(defaults.currency),
            placeholder_image: value(ENV_PLACEHOLDER_IMAGE).unwrap_or(defaults.placeholder_image),
            log_format,
        };
        (config, warnings)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T, warnings: &mut Vec<ConfigWarning>) -> T
where
    T: core::str::FromStr + core::fmt::Display,
{
    match raw {
        Some(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warnings.push(ConfigWarning {
                    key,
                    reason: format!("not a non-negative integer; using {default}"),
                    value: raw,
                });
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.thresholds.low_stock_below, 50);
        assert_eq!(config.activity_limit, 10);
        assert_eq!(config.currency, "KES");
    }

    #[test]
    fn reads_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_SNAPSHOT_DIR, "/srv/nursery"),
            (ENV_LOW_STOCK_THRESHOLD, "75"),
            (ENV_ACTIVITY_LIMIT, "5"),
            (ENV_CURRENCY, "USD"),
            (ENV_LOG_FORMAT, "pretty"),
        ]));

        assert_eq!(config.snapshot_dir, PathBuf::from("/srv/nursery"));
        assert_eq!(config.thresholds, StockThresholds::new(75));
        assert_eq!(config.activity_limit, 5);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[
            (ENV_LOW_STOCK_THRESHOLD, "lots"),
            (ENV_ACTIVITY_LIMIT, "-3"),
            (ENV_CURRENCY, "   "),
        ]));

        assert_eq!(config.thresholds.low_stock_below, LOW_STOCK_THRESHOLD);
        assert_eq!(config.activity_limit, RECENT_ACTIVITY_LIMIT);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn invalid_values_are_reported_as_warnings() {
        let (config, warnings) = DashboardConfig::load(lookup(&[
            (ENV_ACTIVITY_LIMIT, "lots"),
            (ENV_LOG_FORMAT, "xml"),
            (ENV_CURRENCY, "USD"),
        ]));

        assert_eq!(config.activity_limit, RECENT_ACTIVITY_LIMIT);
        assert_eq!(config.log_format, LogFormat::Json);
        let keys: Vec<&str> = warnings.iter().map(|w| w.key).collect();
        assert_eq!(keys, vec![ENV_ACTIVITY_LIMIT, ENV_LOG_FORMAT]);
        assert_eq!(warnings[0].value, "lots");
    }

    #[test]
    fn valid_values_produce_no_warnings() {
        let (_, warnings) = DashboardConfig::load(lookup(&[(ENV_LOW_STOCK_THRESHOLD, "20")]));
        assert!(warnings.is_empty());
    }
}
