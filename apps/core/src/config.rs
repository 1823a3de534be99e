//! Configuration for the Hades shell.
//!
//! Sources, later wins: built-in defaults, a JSON file named by
//! `HADES_CONFIG`, then individual `HADES_*` environment variables.
//! The brain takes no configuration; everything here concerns the
//! interactive shell around it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::error::AppError;

pub const CONFIG_PATH_VAR: &str = "HADES_CONFIG";
pub const NAME_VAR: &str = "HADES_NAME";
pub const THINK_DELAY_MIN_VAR: &str = "HADES_THINK_DELAY_MIN_MS";
pub const THINK_DELAY_MAX_VAR: &str = "HADES_THINK_DELAY_MAX_MS";
pub const LOG_FORMAT_VAR: &str = "HADES_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "HADES_LOG";

const MAX_THINK_DELAY_MS: u64 = 10_000;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}' (expected pretty or json)", other)),
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_delay_window"))]
pub struct HadesConfig {
    /// Display name of the assistant.
    #[validate(length(min = 1))]
    pub name: String,
    /// Lower bound of the simulated "thinking" delay.
    #[validate(range(max = 10000))]
    pub think_delay_min_ms: u64,
    /// Upper bound of the simulated "thinking" delay.
    #[validate(range(max = 10000))]
    pub think_delay_max_ms: u64,
    pub log_format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for HadesConfig {
    fn default() -> Self {
        Self {
            name: "Hades".to_string(),
            think_delay_min_ms: 800,
            think_delay_max_ms: 1600,
            log_format: LogFormat::Pretty,
            log_filter: "info".to_string(),
        }
    }
}

fn validate_delay_window(config: &HadesConfig) -> Result<(), ValidationError> {
    if config.think_delay_min_ms > config.think_delay_max_ms {
        return Err(ValidationError::new("think_delay_window"));
    }
    Ok(())
}

/// Reads and parses one environment variable, `None` when unset.
fn env_parse<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", key, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", key, e))),
    }
}

impl HadesConfig {
    /// Load from defaults, optional file and environment, then validate.
    pub fn load() -> Result<Self, AppError> {
        let mut config = match env_parse::<String>(CONFIG_PATH_VAR)? {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Override fields from `HADES_*` environment variables.
    pub fn apply_env(&mut self) -> Result<(), AppError> {
        if let Some(name) = env_parse::<String>(NAME_VAR)? {
            self.name = name;
        }
        if let Some(min) = env_parse(THINK_DELAY_MIN_VAR)? {
            self.think_delay_min_ms = min;
        }
        if let Some(max) = env_parse(THINK_DELAY_MAX_VAR)? {
            self.think_delay_max_ms = max;
        }
        if let Some(format) = env_parse(LOG_FORMAT_VAR)? {
            self.log_format = format;
        }
        if let Some(filter) = env_parse::<String>(LOG_FILTER_VAR)? {
            self.log_filter = filter;
        }
        Ok(())
    }

    /// Draw a delay uniformly from the configured window.
    pub fn think_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.think_delay_min_ms.min(MAX_THINK_DELAY_MS);
        let max = self.think_delay_max_ms.clamp(min, MAX_THINK_DELAY_MS);
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults_are_valid() {
        let config = HadesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.name, "Hades");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let config = HadesConfig {
            think_delay_min_ms: 2000,
            think_delay_max_ms: 100,
            ..HadesConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = HadesConfig {
            name: String::new(),
            ..HadesConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_think_delay_within_window() {
        let config = HadesConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let delay = config.think_delay(&mut rng);
            assert!(delay >= Duration::from_millis(800));
            assert!(delay <= Duration::from_millis(1600));
        }
    }

    #[test]
    fn test_zero_window() {
        let config = HadesConfig {
            think_delay_min_ms: 0,
            think_delay_max_ms: 0,
            ..HadesConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(config.think_delay(&mut rng), Duration::ZERO);
    }
}
