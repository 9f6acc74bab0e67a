/*!
 * Caption file handling: format detection and parsing.
 *
 * # Architecture
 *
 * - `detect`: classifies a file as WebVTT or SRT from its leading bytes and extension
 * - `timestamp`: shared timestamp and timeline conversion to seconds
 * - `webvtt`: WebVTT state machine
 * - `srt`: SRT state machine with its recovery paths
 * - `lines`: the line sources feeding both state machines, with and without a
 *   per-line memory ceiling
 *
 * The standard and bounded entry points run the same state machines, so for
 * files whose lines all fit under the ceiling they produce identical captions.
 */

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

pub mod detect;
pub mod lines;
pub mod srt;
pub mod timestamp;
pub mod webvtt;

pub use detect::{detect_caption_format, detect_format_from_header};
pub use lines::{BoundedLines, MAX_LINE_BYTES};

use crate::errors::CaptionError;

static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("markup regex is valid"));

/// Supported caption formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionFormat {
    /// WebVTT (`WEBVTT` header, `HH:MM:SS.mmm` timestamps)
    WebVtt,
    /// SubRip (`HH:MM:SS,mmm` timestamps)
    Srt,
}

impl CaptionFormat {
    /// Name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::WebVtt => "WebVTT",
            Self::Srt => "SRT",
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single caption cue
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    /// Sequence number (sequential for WebVTT, taken from the file for SRT)
    pub index: usize,

    /// Start time in seconds
    pub start_time: f64,

    /// End time in seconds; malformed files may put it before `start_time`
    pub end_time: f64,

    /// Text lines joined with `\n`, kept verbatim
    pub text: String,
}

impl Caption {
    /// Create a new caption
    pub fn new(index: usize, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start_time,
            end_time,
            text: text.into(),
        }
    }
}

/// Captions of one parsed file, in file order, with the detected format
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSequence {
    /// Detected format
    pub format: CaptionFormat,

    /// Captions in file order
    pub captions: Vec<Caption>,
}

impl CaptionSequence {
    /// Number of captions
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Whether the file contained no captions
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Plain text of all captions, for language checks
    pub fn plain_text(&self) -> String {
        extract_plain_text(&self.captions)
    }
}

/// Detect and parse a caption file
pub fn parse_captions_file<P: AsRef<Path>>(path: P) -> Result<CaptionSequence, CaptionError> {
    let path = path.as_ref();
    let format = detect_caption_format(path)?;
    let captions = parse_captions(BufReader::new(File::open(path)?), format)?;

    debug!("Parsed {} captions from {:?}", captions.len(), path);
    Ok(CaptionSequence { format, captions })
}

/// Detect and parse a caption file with the per-line memory ceiling
pub fn parse_large_captions_file<P: AsRef<Path>>(path: P) -> Result<CaptionSequence, CaptionError> {
    let path = path.as_ref();
    let format = detect_caption_format(path)?;
    let reader = BufReader::with_capacity(MAX_LINE_BYTES, File::open(path)?);
    let captions = parse_captions_bounded(reader, format)?;

    debug!("Parsed {} captions from {:?} (bounded)", captions.len(), path);
    Ok(CaptionSequence { format, captions })
}

/// Parse captions of a known format from a reader
pub fn parse_captions<R: BufRead>(reader: R, format: CaptionFormat) -> Result<Vec<Caption>, CaptionError> {
    let lines = lines::unbounded_lines(reader);
    match format {
        CaptionFormat::WebVtt => webvtt::parse_lines(lines),
        CaptionFormat::Srt => srt::parse_lines(lines),
    }
}

/// Parse captions of a known format, failing on any line over `MAX_LINE_BYTES`
pub fn parse_captions_bounded<R: BufRead>(reader: R, format: CaptionFormat) -> Result<Vec<Caption>, CaptionError> {
    let lines = BoundedLines::new(reader);
    match format {
        CaptionFormat::WebVtt => webvtt::parse_lines(lines),
        CaptionFormat::Srt => srt::parse_lines(lines),
    }
}

/// Concatenate caption texts with `<...>` markup removed, separated by single spaces
pub fn extract_plain_text(captions: &[Caption]) -> String {
    captions
        .iter()
        .map(|caption| MARKUP_REGEX.replace_all(&caption.text, ""))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
