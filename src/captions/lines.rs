/*!
 * Line sources feeding the caption state machines.
 *
 * Both parsers consume an iterator of lines, so the standard and the
 * bounded-memory variants share one state machine each and differ only in
 * where their lines come from:
 * - `unbounded_lines`: `BufRead::lines`, memory bounded only by the longest line
 * - `BoundedLines`: refuses any physical line longer than a fixed ceiling
 *
 * Both strip a trailing `\n` and a `\r` immediately before it, and both
 * reject invalid UTF-8.
 */

use std::io::{self, BufRead};

use crate::errors::CaptionError;

/// Maximum length of a physical line accepted by the bounded parsers (64 KiB)
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Lines read from any buffered reader, without a length ceiling
pub fn unbounded_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, CaptionError>> {
    reader.lines().map(|line| line.map_err(CaptionError::from))
}

/// Line iterator with a fixed per-line memory ceiling.
///
/// A line longer than `max_bytes` (terminator excluded) yields
/// `CaptionError::LineTooLong` and ends the iteration; the line is never
/// truncated.
pub struct BoundedLines<R> {
    reader: R,
    max_bytes: usize,
    line_number: usize,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> BoundedLines<R> {
    /// Create a bounded line source with the default 64 KiB ceiling
    pub fn new(reader: R) -> Self {
        Self::with_max_bytes(reader, MAX_LINE_BYTES)
    }

    /// Create a bounded line source with a custom ceiling
    pub fn with_max_bytes(reader: R, max_bytes: usize) -> Self {
        Self {
            reader,
            max_bytes,
            line_number: 0,
            buf: Vec::new(),
            finished: false,
        }
    }

    fn too_long(&mut self) -> CaptionError {
        self.finished = true;
        CaptionError::LineTooLong {
            line_number: self.line_number,
            max_bytes: self.max_bytes,
        }
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = Result<String, CaptionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buf.clear();
        self.line_number += 1;
        let mut read_any = false;
        let mut saw_newline = false;

        loop {
            let (used, line_complete) = {
                let available = match self.reader.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.finished = true;
                        return Some(Err(e.into()));
                    }
                };

                if available.is_empty() {
                    self.finished = true;
                    (0, true)
                } else if let Some(pos) = available.iter().position(|&b| b == b'\n') {
                    self.buf.extend_from_slice(&available[..pos]);
                    saw_newline = true;
                    (pos + 1, true)
                } else {
                    self.buf.extend_from_slice(available);
                    (available.len(), false)
                }
            };

            if used > 0 {
                read_any = true;
            }
            self.reader.consume(used);

            // One extra byte of slack for a `\r` that is stripped below
            if self.buf.len() > self.max_bytes + 1 {
                return Some(Err(self.too_long()));
            }

            if line_complete {
                break;
            }
        }

        if !read_any {
            return None;
        }

        // A `\r` is only a line ending when a `\n` follows it
        if saw_newline && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > self.max_bytes {
            return Some(Err(self.too_long()));
        }

        match std::str::from_utf8(&self.buf) {
            Ok(line) => Some(Ok(line.to_owned())),
            Err(_) => {
                self.finished = true;
                Some(Err(CaptionError::Io(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                ))))
            }
        }
    }
}
