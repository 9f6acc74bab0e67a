// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use caption_validator::app_config::{self, Config, DEFAULT_CONFIG_PATH};
use caption_validator::app_controller::{Controller, TimeWindow};
use caption_validator::time_input::parse_time_input;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for caption-validator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Caption Validator - coverage and language checks for caption files
///
/// Validates WebVTT and SRT caption files: the share of a time window covered
/// by captions and, through an external API, the language of the caption text.
#[derive(Parser, Debug)]
#[command(name = "caption-validator")]
#[command(version)]
#[command(about = "Caption file coverage and language validator")]
#[command(long_about = "caption-validator checks that WebVTT and SRT captions cover enough of a time window
and that they are written in the expected language.

Failed checks are printed to stdout as one JSON object per line. Log messages go to
the log file (caption-validator.log by default).

EXAMPLES:
    caption-validator --t-end 60 movie.vtt                   # Window 0..60s, default threshold
    caption-validator --t-start 00:01:00 --t-end 1h movie.srt
    caption-validator --coverage 80 --t-end 45m --api '' ./captions/
    caption-validator --large --t-end 2h huge.vtt            # Force the bounded parser
    caption-validator completions bash > caption-validator.bash

EXIT STATUS:
    1 on a missing file, unsupported format, parse failure or wrong language.
    Coverage failures are reported but do not change the exit status.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Caption file or directory to validate
    #[arg(value_name = "CAPTIONS_PATH")]
    captions_path: Option<PathBuf>,

    /// Minimum percentage of the window that must be covered by captions
    #[arg(long)]
    coverage: Option<f64>,

    /// Window start: seconds, HH:MM:SS, MM:SS, 2h, 90m or 1h30m15s
    #[arg(long = "t-start", alias = "t_start", default_value = "0")]
    t_start: String,

    /// Window end, same formats as --t-start (required)
    #[arg(long = "t-end", alias = "t_end")]
    t_end: Option<String>,

    /// URL of the language validation API, empty to disable the check
    #[arg(long)]
    api: Option<String>,

    /// Expected caption language tag (e.g. 'en-US')
    #[arg(long)]
    expected_language: Option<String>,

    /// Always use the bounded-memory parser
    #[arg(long)]
    large: bool,

    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Logger appending timestamped lines to a file
struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    // @initializes: Global logger writing to `path`
    fn init<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Error opening log file: {:?}", path))?;

        Self::install(FileLogger {
            level,
            file: Mutex::new(file),
        })
        .map_err(|e| anyhow!("Failed to install logger: {}", e))
    }

    fn install(logger: FileLogger) -> Result<(), SetLoggerError> {
        let level = logger.level;
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%Y/%m/%d %H:%M:%S%.3f");
            let mut file = self.file.lock();
            let _ = writeln!(file, "{} [{}] {}", now, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "caption-validator", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    FileLogger::init(&config.log_file, config.log_level.into())?;

    match run(cli, config).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            log::logger().flush();
            std::process::exit(1);
        }
        Err(e) => {
            error!("{:#}", e);
            log::logger().flush();
            Err(e)
        }
    }
}

/// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config)?;

    if let Some(coverage) = cli.coverage {
        config.min_coverage = coverage;
    }
    if let Some(api) = &cli.api {
        config.language_api_url = api.clone();
    }
    if let Some(language) = &cli.expected_language {
        config.expected_language = language.clone();
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = log_file.clone();
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

/// Validate the requested path, returns false when the exit status must be 1
async fn run(cli: CommandLineOptions, config: Config) -> Result<bool> {
    let captions_path = cli
        .captions_path
        .ok_or_else(|| anyhow!("Missing captions file path"))?;

    let start = parse_time_input(&cli.t_start).context("Error parsing --t-start")?;
    let end_input = cli.t_end.ok_or_else(|| anyhow!("--t-end is required"))?;
    let end = parse_time_input(&end_input).context("Error parsing --t-end")?;
    let window = TimeWindow::new(start, end)?;

    let controller = Controller::with_config(config)?.force_large(cli.large);
    let outcomes = controller.run(&captions_path, window).await?;

    let mut stdout = std::io::stdout().lock();
    let mut success = true;
    for outcome in &outcomes {
        for line in outcome.output_lines() {
            writeln!(stdout, "{}", line)?;
        }
        success &= !outcome.is_fatal();
    }

    if success {
        info!("Validation completed");
    } else {
        info!("Validation completed with fatal failures");
    }

    Ok(success)
}
