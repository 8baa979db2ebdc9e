// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use video_config::app_config::{self, Config};
use video_config::{Controller, RunOverrides};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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
    /// List the transcript translations available for a video
    Translations(TranslationsArgs),

    /// Generate shell completions for video-config
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslationsArgs {
    /// Video manifest (JSON) to inspect
    #[arg(value_name = "MANIFEST")]
    manifest_path: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "video_config.json", env = "VIDEO_CONFIG_PATH")]
    config_path: PathBuf,

    /// Do not offer English when the video declares no transcripts
    #[arg(long)]
    no_fallback: bool,

    /// Only report transcripts whose files exist in the transcript root
    #[arg(long, conflicts_with = "trust_fields")]
    verify_assets: bool,

    /// Report declared transcripts without checking their files
    #[arg(long)]
    trust_fields: bool,

    /// Directory holding uploaded transcript files
    #[arg(short, long)]
    transcript_root: Option<PathBuf>,

    /// Print the result as a JSON array
    #[arg(long)]
    json: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// video-config - transcript translation lookup for video components
#[derive(Parser, Debug)]
#[command(name = "video-config")]
#[command(version)]
#[command(about = "Lists the transcript translations a video offers")]
#[command(long_about = "video-config reads a video manifest and lists the transcript translations it offers.

EXAMPLES:
    video-config translations video.json                      # Use default config
    video-config translations --no-fallback video.json        # Never fall back to English
    video-config translations -t ./static --verify-assets v.json  # Check transcript files exist
    video-config translations --json video.json               # Machine readable output
    video-config completions bash > video-config.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in video_config.json by default. If the config file
    doesn't exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Max level is narrowed again once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "video-config", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translations(args) => run_translations(args),
    }
}

fn run_translations(options: TranslationsArgs) -> Result<()> {
    let overrides = RunOverrides {
        no_fallback: options.no_fallback,
        verify_assets: options.verify_assets,
        trust_fields: options.trust_fields,
        transcript_root: options.transcript_root.clone(),
        log_level: options.log_level.clone().map(Into::into),
    };

    if let Some(level) = &overrides.log_level {
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;
    overrides.apply(&mut config);
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;
    let entries = controller
        .translations(&options.manifest_path, overrides.verify_mode())
        .context(format!("Failed to list translations for {}", options.manifest_path.display()))?;

    let output = Controller::render(&entries, options.json)?;
    if !output.is_empty() {
        writeln!(std::io::stdout(), "{}", output)?;
    }

    Ok(())
}
