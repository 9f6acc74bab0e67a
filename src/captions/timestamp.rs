/*!
 * Timestamp and timeline parsing shared by both caption formats.
 *
 * Timestamps are `HH:MM:SS.frac` or `MM:SS.frac`; SRT writes the fraction
 * after a comma, which is normalised to a period before the generic parse.
 * A timeline is `<start> --> <end>`, where WebVTT may append cue settings
 * after the end timestamp.
 */

use crate::captions::CaptionFormat;
use crate::errors::CaptionError;

/// Separator between the start and end timestamps of a timeline
pub const ARROW: &str = "-->";

/// Parse a timestamp in the given format's notation to seconds
pub fn parse_timestamp(timestamp: &str, format: CaptionFormat) -> Result<f64, CaptionError> {
    match format {
        CaptionFormat::WebVtt => parse_seconds(timestamp),
        CaptionFormat::Srt => parse_seconds(&timestamp.replacen(',', ".", 1)),
    }
}

/// Parse a `start --> end` line to a pair of second offsets
pub fn parse_timeline(line: &str, format: CaptionFormat) -> Result<(f64, f64), CaptionError> {
    let (start, end) = line
        .trim()
        .split_once(ARROW)
        .ok_or_else(|| CaptionError::InvalidTimeline(line.to_string()))?;

    let start = start.trim();
    let end = match format {
        // Cue settings follow the end timestamp after whitespace
        CaptionFormat::WebVtt => end.split_whitespace().next().unwrap_or(""),
        CaptionFormat::Srt => end.trim(),
    };

    Ok((parse_timestamp(start, format)?, parse_timestamp(end, format)?))
}

/// `H:M:S` or `M:S` with the fractional part on the seconds component
fn parse_seconds(timestamp: &str) -> Result<f64, CaptionError> {
    let parts: Vec<&str> = timestamp.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(CaptionError::InvalidTimestamp(timestamp.to_string()));
    }

    let mut seconds = 0.0;
    for part in &parts {
        let value = part
            .parse::<f64>()
            .map_err(|_| CaptionError::InvalidTimestamp(timestamp.to_string()))?;
        seconds = seconds * 60.0 + value;
    }

    Ok(seconds)
}
