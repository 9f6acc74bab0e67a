/*!
 * Caption coverage validation.
 *
 * Measures how much of a time window has at least one active caption:
 * - captions are clipped to the window, captions outside it are dropped
 * - clipped segments are sorted and merged, touching segments counting as
 *   contiguous
 * - the merged length over the window length gives the coverage percentage
 */

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use crate::captions::Caption;
use crate::errors::CaptionError;

/// Result of a coverage check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Whether the actual coverage reached the required coverage
    #[serde(skip)]
    pub valid: bool,
    /// Required coverage in percent
    pub required_coverage: f64,
    /// Measured coverage in percent
    pub actual_coverage: f64,
    /// Window start in seconds
    pub start_time: f64,
    /// Window end in seconds
    pub end_time: f64,
    /// Seconds of the window covered by captions
    pub covered_time: f64,
    /// Window length in seconds
    pub total_time: f64,
    /// Seconds still missing to reach the requirement, only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_coverage_seconds: Option<f64>,
}

/// Clipped caption interval, only alive during the merge
#[derive(Debug, Clone, Copy)]
struct TimeSegment {
    start: f64,
    end: f64,
}

/// Check that captions cover at least `min_coverage` percent of `[start_time, end_time]`.
///
/// `min_coverage` is not range checked. Fails only when the window is empty
/// or inverted; no overlap at all is a 0% result.
pub fn validate_coverage(
    captions: &[Caption],
    start_time: f64,
    end_time: f64,
    min_coverage: f64,
) -> Result<CoverageReport, CaptionError> {
    if end_time.partial_cmp(&start_time) != Some(Ordering::Greater) {
        return Err(CaptionError::InvalidRange {
            start: start_time,
            end: end_time,
        });
    }

    let total_time = end_time - start_time;
    let segments = clip_to_window(captions, start_time, end_time);
    let merged = merge_segments(segments);
    let covered_time: f64 = merged.iter().map(|s| s.end - s.start).sum();

    let coverage_percent = covered_time / total_time * 100.0;
    let valid = coverage_percent >= min_coverage;

    debug!(
        "Coverage: {} captions, {} merged segments, {:.2}s of {:.2}s ({:.2}%)",
        captions.len(),
        merged.len(),
        covered_time,
        total_time,
        coverage_percent
    );

    let missing_coverage_seconds = if valid {
        None
    } else {
        Some(round2((min_coverage / 100.0) * total_time - covered_time))
    };

    Ok(CoverageReport {
        valid,
        required_coverage: round2(min_coverage),
        actual_coverage: round2(coverage_percent),
        start_time,
        end_time,
        covered_time: round2(covered_time),
        total_time,
        missing_coverage_seconds,
    })
}

fn clip_to_window(captions: &[Caption], start_time: f64, end_time: f64) -> Vec<TimeSegment> {
    captions
        .iter()
        .filter(|c| c.end_time > start_time && c.start_time < end_time)
        .map(|c| TimeSegment {
            start: c.start_time.max(start_time),
            end: c.end_time.min(end_time),
        })
        // Inverted cues would subtract from the covered time
        .filter(|s| s.end > s.start)
        .collect()
}

fn merge_segments(mut segments: Vec<TimeSegment>) -> Vec<TimeSegment> {
    segments.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: Vec<TimeSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(current) if segment.start <= current.end => {
                current.end = current.end.max(segment.end);
            }
            _ => merged.push(segment),
        }
    }
    merged
}

/// Round to two decimals, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
