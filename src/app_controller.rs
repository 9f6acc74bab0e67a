use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::captions::{self, CaptionFormat, CaptionSequence};
use crate::errors::{AppError, CaptionError};
use crate::file_utils::FileManager;
use crate::language_client::{HttpLanguageDetector, LanguageDetector};
use crate::time_input::format_seconds;
use crate::validation::{FileFailure, ValidationResult, validate_coverage, validate_language};

// @module: Application controller for caption validation

/// Time window the coverage is measured over, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    /// Create a window, rejecting empty or inverted ranges
    pub fn new(start: f64, end: f64) -> Result<Self, CaptionError> {
        if end.partial_cmp(&start) != Some(Ordering::Greater) {
            return Err(CaptionError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }
}

/// Checks that ran on one caption file
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub file: PathBuf,
    pub format: CaptionFormat,
    pub caption_count: usize,
    pub results: Vec<ValidationResult>,
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// The file was parsed and validated
    Checked(FileReport),
    /// The file could not be validated
    Failed(FileFailure),
}

impl FileOutcome {
    /// JSON lines to print: failed checks and file failures only
    pub fn output_lines(&self) -> Vec<String> {
        match self {
            Self::Checked(report) => report
                .results
                .iter()
                .filter(|r| !r.is_valid())
                .map(ValidationResult::to_json)
                .collect(),
            Self::Failed(failure) => vec![failure.to_json()],
        }
    }

    /// Whether this outcome makes the process exit with a failure status.
    ///
    /// Coverage failures alone are reported but not fatal.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Checked(report) => report
                .results
                .iter()
                .any(|r| matches!(r, ValidationResult::Language(l) if !l.valid)),
            Self::Failed(_) => true,
        }
    }
}

/// Main application controller for caption validation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Language backend, None when the check is disabled
    detector: Option<Box<dyn LanguageDetector>>,
    // @field: Always use the bounded parser
    force_large: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;

        let detector: Option<Box<dyn LanguageDetector>> = if config.language_check_enabled() {
            Some(Box::new(HttpLanguageDetector::new(
                config.language_api_url.clone(),
                config.request_timeout(),
            )?))
        } else {
            info!("Language validation disabled (no API URL configured)");
            None
        };

        Ok(Self {
            config,
            detector,
            force_large: false,
        })
    }

    /// Create a controller with an explicit language backend
    pub fn with_detector(config: Config, detector: Option<Box<dyn LanguageDetector>>) -> Self {
        Self {
            config,
            detector,
            force_large: false,
        }
    }

    /// Force the bounded parser regardless of file size
    pub fn force_large(mut self, force: bool) -> Self {
        self.force_large = force;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate a single file or every caption file below a directory
    pub async fn run(&self, path: &Path, window: TimeWindow) -> Result<Vec<FileOutcome>> {
        if FileManager::dir_exists(path) {
            return self.run_folder(path, window).await;
        }

        Ok(vec![self.validate_file(path, window).await?])
    }

    /// Validate every caption file below a directory, in path order
    pub async fn run_folder(&self, dir: &Path, window: TimeWindow) -> Result<Vec<FileOutcome>> {
        let files = FileManager::find_caption_files(dir)?;
        if files.is_empty() {
            return Err(anyhow!("No caption files found in directory: {:?}", dir));
        }

        info!("Validating {} caption files in {:?}", files.len(), dir);

        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            outcomes.push(self.validate_file(file, window).await?);
        }

        let failed = outcomes.iter().filter(|o| o.is_fatal()).count();
        info!("Finished {} files, {} with fatal failures", outcomes.len(), failed);

        Ok(outcomes)
    }

    /// Detect, parse and validate one caption file.
    ///
    /// Per-file problems become `FileOutcome::Failed`; only an invalid time
    /// window or an I/O failure while sizing the file is returned as an error.
    pub async fn validate_file(&self, path: &Path, window: TimeWindow) -> Result<FileOutcome, AppError> {
        let display = path.to_string_lossy().to_string();

        if !FileManager::file_exists(path) {
            error!("Captions file does not exist: {}", display);
            return Ok(FileOutcome::Failed(FileFailure::not_found(display)));
        }

        let sequence = match self.parse(path)? {
            Ok(sequence) => sequence,
            Err(CaptionError::UnsupportedFormat) => {
                error!("Unsupported caption format for file: {}", display);
                return Ok(FileOutcome::Failed(FileFailure::unsupported_format(display)));
            }
            Err(e) => {
                error!("Error parsing captions file {}: {}", display, e);
                return Ok(FileOutcome::Failed(FileFailure::parse_error(display, e)));
            }
        };

        info!("Detected caption format: {}", sequence.format);
        info!(
            "Validating captions from {} to {} with minimum coverage of {:.2}%",
            format_seconds(window.start),
            format_seconds(window.end),
            self.config.min_coverage
        );

        let mut results = Vec::new();

        let coverage = validate_coverage(&sequence.captions, window.start, window.end, self.config.min_coverage)?;
        if !coverage.valid {
            warn!("Coverage {:.2}% below required {:.2}%", coverage.actual_coverage, coverage.required_coverage);
        }
        results.push(ValidationResult::from(coverage));

        if let Some(language) = self.check_language(&sequence).await {
            results.push(ValidationResult::from(language));
        }

        Ok(FileOutcome::Checked(FileReport {
            file: path.to_path_buf(),
            format: sequence.format,
            caption_count: sequence.len(),
            results,
        }))
    }

    /// Parse with the bounded reader when forced or when the file is large.
    ///
    /// The outer error is for sizing the file, the inner one for parsing it.
    fn parse(&self, path: &Path) -> Result<Result<CaptionSequence, CaptionError>, AppError> {
        let size = FileManager::file_size(path).map_err(|e| AppError::File(e.to_string()))?;
        let bounded = self.force_large || size >= self.config.large_file_threshold_bytes;

        if bounded {
            debug!("Using bounded parser for {:?} ({} bytes)", path, size);
            Ok(captions::parse_large_captions_file(path))
        } else {
            Ok(captions::parse_captions_file(path))
        }
    }

    async fn check_language(&self, sequence: &CaptionSequence) -> Option<crate::validation::LanguageReport> {
        let Some(detector) = self.detector.as_deref() else {
            debug!("Language validation skipped (no detector)");
            return None;
        };

        let text = sequence.plain_text();
        if text.is_empty() {
            info!("Language validation skipped (no caption text)");
            return None;
        }

        match validate_language(detector, &text, &self.config.expected_language).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Error validating language: {}", e);
                warn!("Skipping language validation");
                None
            }
        }
    }
}
