/*!
 * WebVTT parser.
 *
 * A header line starting with `WEBVTT`, a preamble up to the first blank
 * line, then blank-line separated cues. Cue identifiers and comments are
 * ignored and cues are numbered sequentially from 1 regardless of any
 * identifier text in the file.
 */

use log::debug;

use crate::captions::timestamp::{self, ARROW};
use crate::captions::{Caption, CaptionFormat};
use crate::errors::CaptionError;

/// Signature every WebVTT file starts with
pub const WEBVTT_SIGNATURE: &str = "WEBVTT";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

enum State {
    /// Waiting for the first non-empty line
    Header,
    /// Metadata between the signature and the first blank line
    Preamble,
    /// Between cues
    Idle,
    /// Collecting the text of a cue
    InCue(PendingCue),
}

struct PendingCue {
    start_time: f64,
    end_time: f64,
    lines: Vec<String>,
}

impl PendingCue {
    fn from_timeline(line: &str) -> Result<Self, CaptionError> {
        let (start_time, end_time) = timestamp::parse_timeline(line, CaptionFormat::WebVtt)?;
        Ok(Self {
            start_time,
            end_time,
            lines: Vec::new(),
        })
    }

    fn finish(self, index: usize) -> Caption {
        Caption::new(index, self.start_time, self.end_time, self.lines.join("\n"))
    }
}

/// Run the WebVTT state machine over a line source.
///
/// Any timeline that fails to parse aborts the whole parse.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Caption>, CaptionError>
where
    I: IntoIterator<Item = Result<String, CaptionError>>,
{
    let mut captions: Vec<Caption> = Vec::new();
    let mut state = State::Header;

    for line in lines {
        let line = line?;

        state = match state {
            State::Header if line.is_empty() => State::Header,
            State::Header => {
                if !line.trim_start_matches(BYTE_ORDER_MARK).starts_with(WEBVTT_SIGNATURE) {
                    return Err(CaptionError::MissingHeader);
                }
                State::Preamble
            }
            State::Preamble if line.is_empty() => State::Idle,
            State::Preamble => State::Preamble,
            State::Idle if line.contains(ARROW) => State::InCue(PendingCue::from_timeline(&line)?),
            State::Idle => State::Idle,
            State::InCue(cue) if line.is_empty() => {
                let index = captions.len() + 1;
                captions.push(cue.finish(index));
                State::Idle
            }
            State::InCue(cue) if line.contains(ARROW) => {
                // Missing separator between two cues
                let index = captions.len() + 1;
                captions.push(cue.finish(index));
                State::InCue(PendingCue::from_timeline(&line)?)
            }
            State::InCue(mut cue) => {
                cue.lines.push(line);
                State::InCue(cue)
            }
        };
    }

    match state {
        State::Header => return Err(CaptionError::MissingHeader),
        State::InCue(cue) => {
            let index = captions.len() + 1;
            captions.push(cue.finish(index));
        }
        State::Preamble | State::Idle => {}
    }

    debug!("Parsed {} WebVTT cues", captions.len());
    Ok(captions)
}
