/*!
 * # Caption Validator
 *
 * A Rust library for validating WebVTT and SRT caption files.
 *
 * ## Features
 *
 * - Detect the caption format from the file header and extension
 * - Parse WebVTT and SRT, tolerating common SRT authoring mistakes
 * - Bounded-memory parsing for very large files
 * - Measure how much of a time window is covered by captions
 * - Check the caption language against an external detection API
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `captions`: caption model, format detection and parsers:
 *   - `captions::detect`: format detection
 *   - `captions::timestamp`: timestamp and timeline parsing
 *   - `captions::webvtt`: WebVTT parser
 *   - `captions::srt`: SRT parser
 *   - `captions::lines`: unbounded and bounded line sources
 * - `validation`: coverage and language checks and their JSON results
 * - `language_client`: language detection API client
 * - `language_utils`: ISO language tag utilities
 * - `time_input`: command line time parsing
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `app_controller`: main application controller
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod captions;
pub mod errors;
pub mod file_utils;
pub mod language_client;
pub mod language_utils;
pub mod time_input;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, FileOutcome, TimeWindow};
pub use captions::{Caption, CaptionFormat, CaptionSequence, parse_captions_file, parse_large_captions_file};
pub use errors::{AppError, CaptionError, LanguageCheckError};
pub use validation::{CoverageReport, LanguageReport, ValidationResult, validate_coverage};
