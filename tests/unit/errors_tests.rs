/*!
 * Tests for error types and conversions
 */

use caption_validator::errors::{AppError, CaptionError, LanguageCheckError};

#[test]
fn test_captionError_invalidRange_shouldDisplayBounds() {
    let error = CaptionError::InvalidRange { start: 10.0, end: 5.0 };
    let display = format!("{}", error);
    assert!(display.contains("10"));
    assert!(display.contains("5"));
}

#[test]
fn test_captionError_fromIo_shouldWrapUnchanged() {
    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream ended");
    let error = CaptionError::from(io);

    match error {
        CaptionError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_languageCheckError_apiError_shouldDisplayStatusAndMessage() {
    let error = LanguageCheckError::ApiError {
        status_code: 503,
        message: "unavailable".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("503"));
    assert!(display.contains("unavailable"));
}

#[test]
fn test_appError_fromCaptionError_shouldWrap() {
    let error: AppError = CaptionError::MissingHeader.into();
    assert!(matches!(error, AppError::Caption(CaptionError::MissingHeader)));
    assert!(format!("{}", error).contains("Missing WEBVTT header"));
}
