// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use aozora_normalizer::app_config::{self, Config};
use aozora_normalizer::app_controller::{Controller, ProcessOutcome};
use aozora_normalizer::file_utils::FileManager;

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
    /// Normalize Aozora Bunko text files (default command)
    #[command(alias = "n")]
    Normalize(NormalizeArgs),

    /// Generate shell completions for aozora-normalizer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Input encoding label, or "auto"
    #[arg(long)]
    input_encoding: Option<String>,

    /// Output encoding label
    #[arg(long)]
    output_encoding: Option<String>,

    /// Print the normalized text instead of writing a file (single file only)
    #[arg(long)]
    stdout: bool,
}

/// aozora-normalizer - plain text from Aozora Bunko transcriptions
///
/// Expands iteration marks and strips the notation legend, footer, ruby,
/// editorial instructions and stray symbols from Aozora Bunko files.
#[derive(Parser, Debug)]
#[command(name = "aozora-normalizer")]
#[command(version)]
#[command(about = "Aozora Bunko text normalizer")]
#[command(long_about = "aozora-normalizer expands iteration marks and removes annotations, footers, ruby and editorial markup from Aozora Bunko text files.

EXAMPLES:
    aozora-normalizer rashomon.txt                  # Write modify/rashomon.txt
    aozora-normalizer -o out/ txt/                  # Process an entire directory
    aozora-normalizer --stdout rashomon.txt         # Print the result
    aozora-normalizer --output-encoding shift_jis txt/
    aozora-normalizer completions bash > aozora-normalizer.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Input encoding label, or "auto"
    #[arg(long)]
    input_encoding: Option<String>,

    /// Output encoding label
    #[arg(long)]
    output_encoding: Option<String>,

    /// Print the normalized text instead of writing a file (single file only)
    #[arg(long)]
    stdout: bool,
}

// @static: Optional log file sink shared by all records
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @attaches: Append-mode log file
    fn attach_file(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            FileManager::ensure_dir(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {:?}", path))?;
        *LOG_FILE.lock() = Some(file);
        Ok(())
    }

    // @returns: Tag and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "\x1B[1;31m"),
            Level::Warn => ("WARN ", "\x1B[1;33m"),
            Level::Info => ("INFO ", "\x1B[1;32m"),
            Level::Debug => ("DEBUG", "\x1B[1;36m"),
            Level::Trace => ("TRACE", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now();
            let (tag, color) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color, now.format("%H:%M:%S.%3f"), tag, record.args()
            );

            if let Some(file) = LOG_FILE.lock().as_mut() {
                let _ = writeln!(
                    file,
                    "[{}] [{}] {}",
                    now.format("%Y-%m-%d %H:%M:%S%.3f"), tag.trim_end(), record.args()
                );
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(file) = LOG_FILE.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set once config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "aozora-normalizer", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Normalize(args)) => run_normalize(args).await,
        None => {
            // Default behavior - top-level args
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let normalize_args = NormalizeArgs {
                input_path,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
                input_encoding: cli.input_encoding,
                output_encoding: cli.output_encoding,
                stdout: cli.stdout,
            };
            run_normalize(normalize_args).await
        }
    }
}

/// Load the config file, creating a default one when it is missing
fn load_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        Ok(config)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

async fn run_normalize(options: NormalizeArgs) -> Result<()> {
    let mut config = load_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.to_string_lossy().to_string();
    }
    if let Some(label) = &options.input_encoding {
        config.input_encoding = label.clone();
    }
    if let Some(label) = &options.output_encoding {
        config.output_encoding = label.clone();
    }

    log::set_max_level(config.log_level.to_level_filter());

    if let Some(log_file) = &config.log_file {
        if let Err(e) = CustomLogger::attach_file(Path::new(log_file)) {
            warn!("Logging to console only: {:#}", e);
        }
    }

    let output_dir = PathBuf::from(&config.output_dir);
    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        if options.stdout {
            let text = controller.normalize_file(&options.input_path).await?;
            print!("{}", text);
            return Ok(());
        }

        match controller.run(options.input_path.clone(), output_dir, options.force_overwrite).await? {
            ProcessOutcome::Written(_) => info!("operation finished."),
            ProcessOutcome::Skipped(path) => info!("Output kept: {}", path.display()),
        }
        Ok(())
    } else if options.input_path.is_dir() {
        if options.stdout {
            return Err(anyhow!("--stdout only applies to a single input file"));
        }

        let report = controller.run_folder(
            options.input_path.clone(),
            output_dir,
            options.force_overwrite,
        ).await?;

        if report.has_failures() {
            error!("{} document(s) failed", report.failures.len());
            return Err(anyhow!("{}", report.summary()));
        }

        info!("operation finished.");
        Ok(())
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}
