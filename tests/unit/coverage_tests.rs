/*!
 * Tests for the coverage engine
 */

use caption_validator::captions::Caption;
use caption_validator::errors::CaptionError;
use caption_validator::validation::validate_coverage;

fn captions(ranges: &[(f64, f64)]) -> Vec<Caption> {
    ranges
        .iter()
        .enumerate()
        .map(|(i, (start, end))| Caption::new(i + 1, *start, *end, format!("Caption {}", i + 1)))
        .collect()
}

#[test]
fn test_validateCoverage_scenarioWithinWindow_shouldPass() {
    let report = validate_coverage(&captions(&[(10.0, 20.0), (25.0, 35.0), (40.0, 55.0)]), 10.0, 55.0, 66.6).unwrap();

    assert!(report.valid);
    assert_eq!(report.total_time, 45.0);
    assert_eq!(report.covered_time, 35.0);
    assert_eq!(report.actual_coverage, 77.78);
    assert_eq!(report.missing_coverage_seconds, None);
}

#[test]
fn test_validateCoverage_scenarioWiderWindow_shouldFail() {
    let report = validate_coverage(&captions(&[(10.0, 20.0), (25.0, 35.0), (40.0, 55.0)]), 5.0, 60.0, 80.0).unwrap();

    assert!(!report.valid);
    assert_eq!(report.actual_coverage, 63.64);
    assert!(report.missing_coverage_seconds.unwrap() > 0.0);
}

#[test]
fn test_validateCoverage_withNoOverlap_shouldReportZero() {
    let report = validate_coverage(&captions(&[(10.0, 20.0)]), 0.0, 5.0, 1.0).unwrap();

    assert!(!report.valid);
    assert_eq!(report.actual_coverage, 0.0);
}

#[test]
fn test_validateCoverage_withTilingSegments_shouldReachHundred() {
    let report = validate_coverage(&captions(&[(0.0, 2.5), (2.5, 7.0), (7.0, 10.0)]), 0.0, 10.0, 100.0).unwrap();

    assert_eq!(report.actual_coverage, 100.0);
    assert!(report.valid);
}

#[test]
fn test_validateCoverage_withOverlaps_shouldNotDoubleCount() {
    let report = validate_coverage(&captions(&[(0.0, 6.0), (4.0, 8.0), (5.0, 7.0)]), 0.0, 10.0, 80.0).unwrap();

    assert_eq!(report.covered_time, 8.0);
    assert!(report.valid);
}

#[test]
fn test_validateCoverage_withInvertedWindow_shouldFail() {
    let result = validate_coverage(&[], 10.0, 10.0, 50.0);
    assert!(matches!(result, Err(CaptionError::InvalidRange { .. })));
}
