/*!
 * Integration tests for the validation workflow
 */

use anyhow::Result;

use caption_validator::app_config::Config;
use caption_validator::app_controller::{Controller, FileOutcome, TimeWindow};
use caption_validator::language_client::{LanguageDetector, MockLanguageDetector};

use crate::common;

fn controller(detector: Option<Box<dyn LanguageDetector>>) -> Controller {
    let config = Config {
        min_coverage: 66.6,
        ..Config::default()
    };
    Controller::with_detector(config, detector)
}

/// Test that a passing file prints nothing and is not fatal
#[tokio::test]
async fn test_run_withPassingFile_shouldPrintNothing() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "ok.vtt", common::SAMPLE_VTT)?;

    let outcomes = controller(Some(Box::new(MockLanguageDetector::fixed("en-US"))))
        .run(&path, TimeWindow::new(10.0, 55.0)?)
        .await?;

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].output_lines().is_empty());
    assert!(!outcomes[0].is_fatal());

    Ok(())
}

/// Test that a directory run validates every caption file in path order
#[tokio::test]
async fn test_run_withDirectory_shouldValidateEachCaptionFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.vtt", common::SAMPLE_VTT)?;
    common::create_test_file(temp_dir.path(), "b.srt", common::SAMPLE_SRT)?;
    common::create_test_file(temp_dir.path(), "c.vtt", "not a caption file\n")?;
    common::create_test_file(temp_dir.path(), "readme.txt", "ignored")?;

    let outcomes = controller(None)
        .run(temp_dir.path(), TimeWindow::new(5.0, 60.0)?)
        .await?;

    assert_eq!(outcomes.len(), 3);
    let lines: Vec<String> = outcomes.iter().flat_map(|o| o.output_lines()).collect();
    assert_eq!(lines.iter().filter(|l| l.contains("caption_coverage")).count(), 2);
    assert!(lines[2].contains("parse_error") || lines[2].contains("unsupported_format"));
    assert!(outcomes[2].is_fatal());
    assert!(!outcomes[0].is_fatal());

    Ok(())
}

/// Test that a WebVTT file without the signature is reported, not aborted
#[tokio::test]
async fn test_validateFile_withMissingSignature_shouldReportFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "NOTVTT\n\n00:00:01.000 --> 00:00:02.000\nHello\n";
    let path = common::create_test_file(temp_dir.path(), "broken.vtt", content)?;

    let outcome = controller(None)
        .validate_file(&path, TimeWindow::new(0.0, 10.0)?)
        .await?;

    assert!(matches!(outcome, FileOutcome::Failed(_)));
    assert!(outcome.is_fatal());

    Ok(())
}

/// Test that the bounded parser is used when forced and gives the same verdict
#[tokio::test]
async fn test_validateFile_withForcedLargeParser_shouldMatchStandard() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "ok.srt", common::SAMPLE_SRT)?;
    let window = TimeWindow::new(5.0, 60.0)?;

    let standard = controller(None).validate_file(&path, window).await?;
    let bounded = controller(None).force_large(true).validate_file(&path, window).await?;

    assert_eq!(standard, bounded);

    Ok(())
}

/// Test that a wrong language is reported with a recommendation
#[tokio::test]
async fn test_validateFile_withWrongLanguage_shouldReportRecommendation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "es.vtt", common::SAMPLE_VTT)?;

    let outcome = controller(Some(Box::new(MockLanguageDetector::fixed("es-ES"))))
        .validate_file(&path, TimeWindow::new(10.0, 55.0)?)
        .await?;

    let lines = outcome.output_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        r#"{"type":"incorrect_language","detected":"es-ES","expected":"en-US","recommendation":"Caption text should be in English (US) language"}"#
    );
    assert!(outcome.is_fatal());

    Ok(())
}
