/*!
 * Caption language validation.
 *
 * The detection itself is delegated to a `LanguageDetector`; this module only
 * compares the detected tag with the expected one.
 */

use log::info;
use serde::Serialize;

use crate::errors::LanguageCheckError;
use crate::language_client::LanguageDetector;
use crate::language_utils;

/// Result of a language check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageReport {
    /// Whether the detected language is the expected one
    #[serde(skip)]
    pub valid: bool,
    /// Tag returned by the detector
    pub detected: String,
    /// Tag the captions should be in
    pub expected: String,
    /// Hint for fixing the captions
    pub recommendation: String,
}

impl LanguageReport {
    /// Compare a detected tag with the expected one
    pub fn new(detected: impl Into<String>, expected: impl Into<String>) -> Self {
        let detected = detected.into();
        let expected = expected.into();
        let valid = language_utils::language_tags_match(&detected, &expected);
        let recommendation = format!(
            "Caption text should be in {} language",
            language_utils::describe_language_tag(&expected)
        );

        Self {
            valid,
            detected,
            expected,
            recommendation,
        }
    }
}

/// Detect the language of `text` and compare it with `expected`
pub async fn validate_language<D>(
    detector: &D,
    text: &str,
    expected: &str,
) -> Result<LanguageReport, LanguageCheckError>
where
    D: LanguageDetector + ?Sized,
{
    let detected = detector.detect(text).await?;
    let report = LanguageReport::new(detected, expected);

    info!(
        "Language validation result: detected='{}', expected='{}', valid={}",
        report.detected, report.expected, report.valid
    );

    Ok(report)
}
