use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Application configuration module
/// This module handles loading and validating the validator settings.
/// Every field is optional in the JSON file and falls back to its default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Minimum coverage in percent
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,

    /// Language detection endpoint, empty disables the language check
    #[serde(default = "default_language_api_url")]
    pub language_api_url: String,

    /// Language tag the captions must be in
    #[serde(default = "default_expected_language")]
    pub expected_language: String,

    /// Language API request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// File the logger appends to
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Files at or above this size are parsed with bounded line buffers
    #[serde(default = "default_large_file_threshold_bytes")]
    pub large_file_threshold_bytes: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Default config file name
pub const DEFAULT_CONFIG_PATH: &str = "caption-validator.json";

fn default_min_coverage() -> f64 {
    95.0
}

fn default_language_api_url() -> String {
    "http://localhost:8080/validate".to_string()
}

fn default_expected_language() -> String {
    "en-US".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_file() -> String {
    "caption-validator.log".to_string()
}

fn default_large_file_threshold_bytes() -> u64 {
    10 * 1024 * 1024
}

impl Config {
    /// Load a configuration file, all missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.min_coverage.is_finite() {
            return Err(anyhow!("Minimum coverage must be a number"));
        }

        if self.language_check_enabled() {
            url::Url::parse(&self.language_api_url)
                .with_context(|| format!("Invalid language API URL: {}", self.language_api_url))?;
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be greater than zero"));
        }

        crate::language_utils::validate_language_tag(&self.expected_language)?;

        Ok(())
    }

    /// Whether the language check should run
    pub fn language_check_enabled(&self) -> bool {
        !self.language_api_url.trim().is_empty()
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            min_coverage: default_min_coverage(),
            language_api_url: default_language_api_url(),
            expected_language: default_expected_language(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
            log_level: LogLevel::default(),
            large_file_threshold_bytes: default_large_file_threshold_bytes(),
        }
    }
}
