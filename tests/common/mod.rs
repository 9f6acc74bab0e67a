/*!
 * Common test utilities for the caption-validator test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three cues at 10-20, 25-35 and 40-55 seconds
pub const SAMPLE_VTT: &str = "WEBVTT

00:00:10.000 --> 00:00:20.000
Caption 1

00:00:25.000 --> 00:00:35.000
Caption 2

00:00:40.000 --> 00:00:55.000
Caption 3
";

/// Same cues as `SAMPLE_VTT` in SRT form
pub const SAMPLE_SRT: &str = "1
00:00:10,000 --> 00:00:20,000
Caption 1

2
00:00:25,000 --> 00:00:35,000
Caption 2

3
00:00:40,000 --> 00:00:55,000
Caption 3
";

/// Route log output to the test harness, ignoring repeated initialization
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Generate a WebVTT document with `count` two-second cues, one every three seconds
pub fn generate_vtt(count: usize) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for i in 0..count {
        let start = i * 3;
        out.push_str(&format!(
            "{}\n{} --> {}\nLine {} of the generated captions\n\n",
            i + 1,
            clock(start, '.'),
            clock(start + 2, '.'),
            i + 1
        ));
    }
    out
}

/// Generate an SRT document with `count` two-second cues, one every three seconds
pub fn generate_srt(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        let start = i * 3;
        out.push_str(&format!(
            "{}\n{} --> {}\nLine {} of the generated captions\n\n",
            i + 1,
            clock(start, ','),
            clock(start + 2, ','),
            i + 1
        ));
    }
    out
}

fn clock(seconds: usize, separator: char) -> String {
    format!(
        "{:02}:{:02}:{:02}{}000",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60,
        separator
    )
}
