/*!
 * Validation checks for parsed captions.
 *
 * # Architecture
 *
 * - `coverage`: share of a time window covered by at least one caption
 * - `language`: detected caption language against the expected one
 * - `report`: tagged result type and its JSON form
 */

pub mod coverage;
pub mod language;
pub mod report;

// Re-export main types
pub use coverage::{CoverageReport, validate_coverage};
pub use language::{LanguageReport, validate_language};
pub use report::{FileFailure, ValidationResult};
