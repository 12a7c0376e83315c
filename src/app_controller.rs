use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::encoding;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::normalizer;

// @module: Application controller for document normalization

/// What happened to a single input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Normalized text was written to the path
    Written(PathBuf),
    /// Output already existed and overwriting was not requested
    Skipped(PathBuf),
}

/// A document that failed during a batch run
#[derive(Debug, Clone)]
pub struct FileFailure {
    // @field: Input file path
    pub path: PathBuf,
    // @field: Rendered error
    pub reason: String,
}

/// Outcome of a folder run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Documents written
    pub processed: usize,
    /// Documents skipped because their output exists
    pub skipped: usize,
    /// Documents that failed, with the reason
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Whether any document failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Folder processing completed: {} processed, {} skipped, {} errors",
            self.processed,
            self.skipped,
            self.failures.len()
        )
    }
}

/// Main application controller for Aozora Bunko normalization
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))
            .context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode raw file bytes and normalize them
    pub fn normalize_bytes(&self, bytes: &[u8]) -> std::result::Result<String, AppError> {
        let decoded = encoding::decode(bytes, &self.config.input_encoding)?;
        Ok(normalizer::transform(&decoded.text)?)
    }

    /// Read and normalize a file without writing anything
    pub async fn normalize_file(&self, input_file: &Path) -> Result<String> {
        let bytes = FileManager::read_bytes(input_file)?;
        let text = self.normalize_bytes(&bytes)
            .with_context(|| format!("Failed to normalize {:?}", input_file))?;
        Ok(text)
    }

    /// Run the single-file workflow; any failure is returned to the caller
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<ProcessOutcome> {
        let start_time = Instant::now();

        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let input_root = input_file.parent().unwrap_or_else(|| Path::new(""));
        let output_path = FileManager::generate_output_path(&input_file, input_root, &output_dir);
        let outcome = self.process_document(&input_file, &output_path, force_overwrite).await
            .with_context(|| format!("Failed to process {:?}", input_file))?;

        match &outcome {
            ProcessOutcome::Written(path) => info!(
                "Success: {} ({})",
                path.display(),
                Self::format_duration(start_time.elapsed())
            ),
            ProcessOutcome::Skipped(_) => {
                warn!("Skipping file, output already exists (use -f to force overwrite)");
            }
        }

        Ok(outcome)
    }

    /// Run the workflow in folder mode, processing every matching file.
    /// A failing document is recorded and the remaining ones still run.
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<BatchReport> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Previous outputs may sit inside the input tree
        let files: Vec<PathBuf> = FileManager::find_files(&input_dir, &self.config.input_extension)?
            .into_iter()
            .filter(|path| !FileManager::is_within(path, &output_dir))
            .collect();

        if files.is_empty() {
            return Err(anyhow!(
                "No .{} files found in directory: {:?}",
                self.config.input_extension.trim_start_matches('.'),
                input_dir
            ));
        }

        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        let mut report = BatchReport::default();

        for input_file in &files {
            let file_name = input_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let output_path = FileManager::generate_output_path(input_file, &input_dir, &output_dir);
            match self.process_document(input_file, &output_path, force_overwrite).await {
                Ok(ProcessOutcome::Written(_)) => report.processed += 1,
                Ok(ProcessOutcome::Skipped(_)) => {
                    debug!("Skipping {}, output already exists", file_name);
                    report.skipped += 1;
                }
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    report.failures.push(FileFailure {
                        path: input_file.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        let summary = report.summary();
        info!("{} - Duration: {}", summary, Self::format_duration(start_time.elapsed()));
        for failure in &report.failures {
            error!("Failed: {} ({})", failure.path.display(), failure.reason);
        }

        let issues_path = output_dir.join(&self.config.issues_log);
        if let Err(e) = self.write_issues_log(&report, &input_dir, &issues_path) {
            warn!("Failed to write issues log: {}", e);
        } else {
            info!("Folder processing logs written to {}", issues_path.display());
        }

        Ok(report)
    }

    /// Decode, normalize, encode and write one document
    async fn process_document(&self, input_file: &Path, output_path: &Path, force_overwrite: bool) -> std::result::Result<ProcessOutcome, AppError> {
        if output_path.exists() && !force_overwrite {
            return Ok(ProcessOutcome::Skipped(output_path.to_path_buf()));
        }

        let bytes = FileManager::read_bytes(input_file)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;
        let text = self.normalize_bytes(&bytes)?;
        debug!("normalized {:?}", input_file);

        let encoded = encoding::encode(&text, &self.config.output_encoding)?;
        FileManager::write_bytes(output_path, &encoded)
            .map_err(|e| AppError::File(format!("{:#}", e)))?;
        debug!("writing finished: {:?}", output_path);

        Ok(ProcessOutcome::Written(output_path.to_path_buf()))
    }

    /// Append the batch summary and each failure to the issues log
    fn write_issues_log(&self, report: &BatchReport, input_dir: &Path, issues_path: &Path) -> Result<()> {
        FileManager::append_to_log_file(
            issues_path,
            &format!("{} ({})", report.summary(), input_dir.display()),
        )?;
        for failure in &report.failures {
            FileManager::append_to_log_file(
                issues_path,
                &format!("[ERROR] {}: {}", failure.path.display(), failure.reason),
            )?;
        }
        Ok(())
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
