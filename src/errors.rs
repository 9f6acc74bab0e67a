/*!
 * Error types for the caption-validator application.
 *
 * This module contains custom error types for the different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while detecting, parsing or measuring caption files
#[derive(Error, Debug)]
pub enum CaptionError {
    /// The file is neither WebVTT nor SRT
    #[error("Unsupported caption format")]
    UnsupportedFormat,

    /// A WebVTT file whose first non-empty line is not the signature
    #[error("Missing WEBVTT header")]
    MissingHeader,

    /// A timestamp with the wrong number of components or a non-numeric component
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A timeline without the `-->` arrow
    #[error("Invalid timeline: {0}")]
    InvalidTimeline(String),

    /// A validation window whose end is not after its start
    #[error("Invalid time range: end time {end} must be greater than start time {start}")]
    InvalidRange {
        /// Window start in seconds
        start: f64,
        /// Window end in seconds
        end: f64,
    },

    /// A physical line longer than the bounded parser accepts
    #[error("Line {line_number} exceeds the maximum line length of {max_bytes} bytes")]
    LineTooLong {
        /// 1-based line number
        line_number: usize,
        /// Configured ceiling
        max_bytes: usize,
    },

    /// Error from the underlying stream, surfaced unchanged
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when talking to the language detection API
#[derive(Error, Debug)]
pub enum LanguageCheckError {
    /// Error when sending the request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Response body returned by the API
        message: String,
    },

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from caption processing
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Error from the language check
    #[error("Language check error: {0}")]
    LanguageCheck(#[from] LanguageCheckError),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
