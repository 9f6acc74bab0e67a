/*!
 * Tests for application configuration
 */

use anyhow::Result;
use caption_validator::app_config::{Config, LogLevel};

use crate::common;

#[test]
fn test_load_withFullFile_shouldReadAllFields() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "caption-validator.json",
        r#"{
            "min_coverage": 90.0,
            "language_api_url": "http://127.0.0.1:9000/detect",
            "expected_language": "fr-FR",
            "request_timeout_secs": 3,
            "log_file": "out.log",
            "log_level": "warn",
            "large_file_threshold_bytes": 1024
        }"#,
    )?;

    let config = Config::load(&path)?;

    assert_eq!(config.min_coverage, 90.0);
    assert_eq!(config.language_api_url, "http://127.0.0.1:9000/detect");
    assert_eq!(config.expected_language, "fr-FR");
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.log_file, "out.log");
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.large_file_threshold_bytes, 1024);
    config.validate()?;

    Ok(())
}

#[test]
fn test_load_withUnknownLogLevel_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.json", r#"{"log_level": "loud"}"#)?;

    assert!(Config::load(&path).is_err());

    Ok(())
}

#[test]
fn test_serialize_default_shouldRoundTrip() -> Result<()> {
    let config = Config::default();
    let json = serde_json::to_string(&config)?;
    let back: Config = serde_json::from_str(&json)?;

    assert_eq!(config, back);

    Ok(())
}
