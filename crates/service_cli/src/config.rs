//! CLI configuration management
//!
//! Handles loading configuration from a TOML file and environment variables.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use quadratic_core::{is_valid_number, Scalar, DEFAULT_TARGET};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Environment variable overriding `default_target`.
pub const ENV_DEFAULT_TARGET: &str = "QUADRATIC_DEFAULT_TARGET";
/// Environment variable overriding `format`.
pub const ENV_FORMAT: &str = "QUADRATIC_FORMAT";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "QUADRATIC_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid default target: {0}. Must be a finite real or complex number")]
    InvalidTarget(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error or 1-5")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[r1, r2]` or the status message
    #[default]
    Text,
    /// `{"roots": [..]}` or `{"status": ".."}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Right-hand side used when `--target` is not given, as a literal
    #[serde(deserialize_with = "deserialize_target")]
    pub default_target: String,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: Level,
}

/// Accepts `default_target = 7`, `= 7.5` or `= "2+3i"`.
fn deserialize_target<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Integer(i) => Ok(i.to_string()),
        // Debug keeps the decimal point so the target stays a float
        toml::Value::Float(f) => Ok(format!("{:?}", f)),
        toml::Value::String(s) => Ok(s),
        other => Err(serde::de::Error::custom(format!(
            "expected a number or string, found {}",
            other.type_str()
        ))),
    }
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_log_level(&s).map_err(serde::de::Error::custom)
}

/// Parses `warn`, `WARN` or the numeric form `2` (1 = error .. 5 = trace).
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    Level::from_str(s.trim()).map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_target: DEFAULT_TARGET.to_string(),
            format: OutputFormat::Text,
            log_level: Level::WARN,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from all sources
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override with environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from a key lookup, using the `QUADRATIC_*` names
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(target) = lookup(ENV_DEFAULT_TARGET) {
            self.default_target = target;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = parse_log_level(&log_level)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_target_scalar().map(|_| ())
    }

    /// The default target as a validated scalar
    pub fn default_target_scalar(&self) -> Result<Scalar, ConfigError> {
        let invalid = || ConfigError::InvalidTarget(self.default_target.clone());
        let target: Scalar = self.default_target.parse().map_err(|_| invalid())?;
        if !is_valid_number(&target) {
            return Err(invalid());
        }
        Ok(target)
    }
}
