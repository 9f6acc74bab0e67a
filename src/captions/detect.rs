/*!
 * Caption format detection.
 *
 * Looks at the first 100 bytes and the file extension only; everything runs
 * in-process. Detection reopens the file, so it can be repeated and does not
 * disturb a later parse.
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::captions::CaptionFormat;
use crate::captions::webvtt::WEBVTT_SIGNATURE;
use crate::errors::CaptionError;

/// Number of leading bytes inspected
pub const HEADER_SNIFF_BYTES: u64 = 100;

// Index line followed by an SRT timeline at the very start of the file
static SRT_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^(?:\xEF\xBB\xBF)?\d+\s*\r?\n\d{2}:\d{2}:\d{2},\d{3}\s*-->")
        .expect("SRT header regex is valid")
});

// Any SRT-style timeline in the sniffed bytes, the content hint that
// identifies SubRip text even when the file does not open with an index
static SRT_TIMELINE_HINT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m-u)^\s*\d{1,2}:\d{2}:\d{2},\d{3}\s*-->\s*\d{1,2}:\d{2}:\d{2},\d{3}")
        .expect("SRT timeline hint regex is valid")
});

/// Determine the format of a caption file
pub fn detect_caption_format<P: AsRef<Path>>(path: P) -> Result<CaptionFormat, CaptionError> {
    let path = path.as_ref();

    let mut header = Vec::with_capacity(HEADER_SNIFF_BYTES as usize);
    File::open(path)?.take(HEADER_SNIFF_BYTES).read_to_end(&mut header)?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let format = detect_format_from_header(&header, extension.as_deref())?;
    debug!("Detected {} for {:?}", format, path);
    Ok(format)
}

/// Classify leading bytes plus an optional lowercase extension (without dot)
pub fn detect_format_from_header(header: &[u8], extension: Option<&str>) -> Result<CaptionFormat, CaptionError> {
    let signature = WEBVTT_SIGNATURE.as_bytes();
    if header.starts_with(signature) || header.windows(signature.len()).any(|w| w == signature) {
        return Ok(CaptionFormat::WebVtt);
    }

    if extension == Some("srt") || has_srt_content_hint(header) || SRT_HEADER_REGEX.is_match(header) {
        return Ok(CaptionFormat::Srt);
    }

    Err(CaptionError::UnsupportedFormat)
}

fn has_srt_content_hint(header: &[u8]) -> bool {
    SRT_TIMELINE_HINT_REGEX.is_match(header)
}
