/*!
 * Validation results and their JSON form.
 *
 * Each check has its own typed report; `ValidationResult` tags them with the
 * `type` field of the external schema and is only turned into JSON here.
 */

use serde::Serialize;

use crate::validation::coverage::CoverageReport;
use crate::validation::language::LanguageReport;

/// Result of one validation check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ValidationResult {
    /// Caption coverage of the time window
    #[serde(rename = "caption_coverage")]
    Coverage(CoverageReport),
    /// Language of the caption text
    #[serde(rename = "incorrect_language")]
    Language(LanguageReport),
}

impl ValidationResult {
    /// Value of the `type` field
    pub fn result_type(&self) -> &'static str {
        match self {
            Self::Coverage(_) => "caption_coverage",
            Self::Language(_) => "incorrect_language",
        }
    }

    /// Whether the check passed
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Coverage(report) => report.valid,
            Self::Language(report) => report.valid,
        }
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"type":"{}","error":"Error marshalling JSON"}}"#,
                self.result_type()
            )
        })
    }
}

impl From<CoverageReport> for ValidationResult {
    fn from(report: CoverageReport) -> Self {
        Self::Coverage(report)
    }
}

impl From<LanguageReport> for ValidationResult {
    fn from(report: LanguageReport) -> Self {
        Self::Language(report)
    }
}

/// Failure that prevented a file from being validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// `file_not_found`, `unsupported_format` or `parse_error`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Path as given
    pub file: String,
    /// Human readable reason
    pub error: String,
}

impl FileFailure {
    /// The file does not exist
    pub fn not_found(file: impl Into<String>) -> Self {
        Self {
            kind: "file_not_found",
            file: file.into(),
            error: "Caption file not found".to_string(),
        }
    }

    /// The file is neither WebVTT nor SRT
    pub fn unsupported_format(file: impl Into<String>) -> Self {
        Self {
            kind: "unsupported_format",
            file: file.into(),
            error: "Unsupported caption file format".to_string(),
        }
    }

    /// The file could not be parsed
    pub fn parse_error(file: impl Into<String>, error: impl ToString) -> Self {
        Self {
            kind: "parse_error",
            file: file.into(),
            error: error.to_string(),
        }
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"type":"{}","error":"Error marshalling JSON"}}"#, self.kind)
        })
    }
}
