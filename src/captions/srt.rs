/*!
 * SRT (SubRip) parser.
 *
 * Blocks of `index`, `start --> end` and text lines separated by blank lines.
 * The parser degrades gracefully on malformed files instead of rejecting them:
 * - a block without an index but with a timeline becomes a cue numbered
 *   `count + 1`
 * - stray text after a finished block becomes a further cue carrying the
 *   previous block's index and timing
 * - a block whose timeline line has no arrow keeps its index, and its times
 *   stay at zero
 * - a valid timeline inside cue text starts a new cue, taking the preceding
 *   text line as its index when that line is a number
 *
 * Only a timeline that has the arrow but a malformed timestamp is fatal.
 */

use log::{debug, warn};

use crate::captions::timestamp::{self, ARROW};
use crate::captions::{Caption, CaptionFormat};
use crate::errors::CaptionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectIndex,
    ExpectTimeline,
    InText,
}

/// The cue being assembled. Index and timing survive a flush so that
/// continuation text inherits them.
#[derive(Debug, Default)]
struct PendingCue {
    index: usize,
    start_time: f64,
    end_time: f64,
    lines: Vec<String>,
}

impl PendingCue {
    fn with_index(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    fn flush_into(&mut self, captions: &mut Vec<Caption>) {
        if self.lines.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.lines).join("\n");
        captions.push(Caption::new(self.index, self.start_time, self.end_time, text));
    }
}

/// Run the SRT state machine over a line source
pub fn parse_lines<I>(lines: I) -> Result<Vec<Caption>, CaptionError>
where
    I: IntoIterator<Item = Result<String, CaptionError>>,
{
    let mut captions: Vec<Caption> = Vec::new();
    let mut pending = PendingCue::default();
    let mut state = State::ExpectIndex;

    for (line_idx, line) in lines.into_iter().enumerate() {
        let line = line?;
        let line_number = line_idx + 1;
        let trimmed = line.trim().trim_start_matches('\u{FEFF}');

        if trimmed.is_empty() {
            if state != State::ExpectIndex {
                pending.flush_into(&mut captions);
                state = State::ExpectIndex;
            }
            continue;
        }

        state = match state {
            State::ExpectIndex => {
                if let Ok(index) = trimmed.parse::<usize>() {
                    pending = PendingCue::with_index(index);
                    State::ExpectTimeline
                } else if let Some((start_time, end_time)) = recoverable_timeline(trimmed, line_number) {
                    warn!("Cue without index at line {}, numbering it {}", line_number, captions.len() + 1);
                    pending = PendingCue {
                        index: captions.len() + 1,
                        start_time,
                        end_time,
                        lines: Vec::new(),
                    };
                    State::InText
                } else if !captions.is_empty() {
                    warn!("Unexpected text at line {}, treating it as a continuation of cue {}", line_number, pending.index);
                    pending.lines.push(line);
                    State::InText
                } else {
                    debug!("Dropping line {} before the first cue: {}", line_number, trimmed);
                    State::ExpectIndex
                }
            }
            State::ExpectTimeline => {
                if trimmed.contains(ARROW) {
                    let (start_time, end_time) = timestamp::parse_timeline(trimmed, CaptionFormat::Srt)?;
                    pending.start_time = start_time;
                    pending.end_time = end_time;
                    pending.lines.clear();
                } else {
                    warn!("Missing timeline for cue {} at line {}, treating the line as text", pending.index, line_number);
                    pending.lines.push(line);
                }
                State::InText
            }
            State::InText => {
                if let Some((start_time, end_time)) = recoverable_timeline(trimmed, line_number) {
                    let index = match pending.lines.last().and_then(|l| l.trim().parse::<usize>().ok()) {
                        Some(index) => {
                            pending.lines.pop();
                            index
                        }
                        None => 0,
                    };
                    pending.flush_into(&mut captions);
                    let index = if index == 0 { captions.len() + 1 } else { index };
                    warn!("Missing blank line before cue {} at line {}", index, line_number);
                    pending = PendingCue {
                        index,
                        start_time,
                        end_time,
                        lines: Vec::new(),
                    };
                } else {
                    pending.lines.push(line);
                }
                State::InText
            }
        };
    }

    if state != State::ExpectIndex {
        pending.flush_into(&mut captions);
    }

    debug!("Parsed {} SRT cues", captions.len());
    Ok(captions)
}

/// Timeline found where an index or text was expected. A timeline that fails
/// to parse here is kept as text instead of aborting.
fn recoverable_timeline(trimmed: &str, line_number: usize) -> Option<(f64, f64)> {
    if !trimmed.contains(ARROW) {
        return None;
    }
    match timestamp::parse_timeline(trimmed, CaptionFormat::Srt) {
        Ok(times) => Some(times),
        Err(e) => {
            debug!("Unparseable timeline at line {}: {}", line_number, e);
            None
        }
    }
}
