/*!
 * Tests for caption format detection and parsing
 */

use std::io::Cursor;

use caption_validator::captions::{
    Caption, CaptionFormat, detect_format_from_header, extract_plain_text, parse_captions,
    parse_captions_bounded,
};
use caption_validator::errors::CaptionError;

use crate::common::{SAMPLE_SRT, SAMPLE_VTT};

fn parse(content: &str, format: CaptionFormat) -> Result<Vec<Caption>, CaptionError> {
    parse_captions(Cursor::new(content), format)
}

/// Test that a WebVTT header is detected regardless of extension
#[test]
fn test_detectFormat_withWebvttHeader_shouldReturnWebVtt() {
    let format = detect_format_from_header(b"WEBVTT\n\n00:00:01.000 --> 00:00:02.000", Some("txt")).unwrap();
    assert_eq!(format, CaptionFormat::WebVtt);
}

/// Test that an SRT block is detected without extension
#[test]
fn test_detectFormat_withSrtBlock_shouldReturnSrt() {
    let format = detect_format_from_header(SAMPLE_SRT.as_bytes(), None).unwrap();
    assert_eq!(format, CaptionFormat::Srt);
}

/// Test that unknown content is rejected
#[test]
fn test_detectFormat_withPlainText_shouldFail() {
    let result = detect_format_from_header(b"just some notes", Some("txt"));
    assert!(matches!(result, Err(CaptionError::UnsupportedFormat)));
}

/// Test that well formed files yield one caption per block
#[test]
fn test_parse_withWellFormedFiles_shouldCountBlocks() {
    let vtt = parse(SAMPLE_VTT, CaptionFormat::WebVtt).unwrap();
    let srt = parse(SAMPLE_SRT, CaptionFormat::Srt).unwrap();

    assert_eq!(vtt.len(), 3);
    assert_eq!(vtt, srt);
}

/// Test that re-parsing the same bytes is deterministic
#[test]
fn test_parse_twice_shouldBeIdentical() {
    assert_eq!(
        parse(SAMPLE_SRT, CaptionFormat::Srt).unwrap(),
        parse(SAMPLE_SRT, CaptionFormat::Srt).unwrap()
    );
}

/// Test that a WebVTT file without the signature fails
#[test]
fn test_parse_webvttWithoutSignature_shouldFailMissingHeader() {
    let result = parse("00:00:01.000 --> 00:00:02.000\nHello\n", CaptionFormat::WebVtt);
    assert!(matches!(result, Err(CaptionError::MissingHeader)));
}

/// Test that two SRT blocks without a separating blank line stay distinct
#[test]
fn test_parse_srtWithMissingBlankLine_shouldKeepCuesDistinct() {
    let content = "1\n00:00:01,000 --> 00:00:03,000\nFirst line\n2\n00:00:04,000 --> 00:00:06,000\nSecond line\n";

    let captions = parse(content, CaptionFormat::Srt).unwrap();

    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].text, "First line");
    assert_eq!(captions[1].text, "Second line");
    assert_eq!((captions[1].start_time, captions[1].end_time), (4.0, 6.0));
}

/// Test that the bounded parser agrees with the standard one
#[test]
fn test_parseBounded_withShortLines_shouldMatchStandard() {
    for (content, format) in [(SAMPLE_VTT, CaptionFormat::WebVtt), (SAMPLE_SRT, CaptionFormat::Srt)] {
        let standard = parse_captions(Cursor::new(content), format).unwrap();
        let bounded = parse_captions_bounded(Cursor::new(content), format).unwrap();
        assert_eq!(standard, bounded);
    }
}

/// Test that the bounded parser rejects oversized lines
#[test]
fn test_parseBounded_withOversizedLine_shouldFail() {
    let content = format!("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n{}\n", "a".repeat(70 * 1024));

    let result = parse_captions_bounded(Cursor::new(content.as_str()), CaptionFormat::WebVtt);

    assert!(matches!(result, Err(CaptionError::LineTooLong { .. })));
    assert!(parse_captions(Cursor::new(content.as_str()), CaptionFormat::WebVtt).is_ok());
}

/// Test that plain text drops markup and joins captions
#[test]
fn test_extractPlainText_shouldStripMarkup() {
    let captions = vec![
        Caption::new(1, 0.0, 1.0, "<i>Hello</i>"),
        Caption::new(2, 1.0, 2.0, "<b>big</b> world"),
    ];
    assert_eq!(extract_plain_text(&captions), "Hello big world");
}
