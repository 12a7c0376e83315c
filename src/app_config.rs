use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::encoding::{self, AUTO_ENCODING};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Extension of the files picked up in folder mode
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Directory receiving the normalized files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Input encoding label, or "auto" to detect it
    #[serde(default = "default_input_encoding")]
    pub input_encoding: String,

    /// Output encoding label
    #[serde(default = "default_output_encoding")]
    pub output_encoding: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Optional log file mirroring console output
    #[serde(default = "default_log_file")]
    pub log_file: Option<String>,

    /// Name of the failure report written to the output directory after a batch
    #[serde(default = "default_issues_log")]
    pub issues_log: String,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_extension() -> String {
    "txt".to_string()
}

fn default_output_dir() -> String {
    "modify".to_string()
}

fn default_input_encoding() -> String {
    AUTO_ENCODING.to_string()
}

fn default_output_encoding() -> String {
    "utf-8".to_string()
}

fn default_log_file() -> Option<String> {
    Some("logs/access.log".to_string())
}

fn default_issues_log() -> String {
    "aozora.issues.log".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Input extension must not be empty"));
        }

        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.issues_log.trim().is_empty() {
            return Err(anyhow!("Issues log name must not be empty"));
        }

        // "auto" is only meaningful for input
        if !self.input_encoding.trim().eq_ignore_ascii_case(AUTO_ENCODING) {
            encoding::resolve_label(&self.input_encoding)?;
        }
        encoding::resolve_label(&self.output_encoding)?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_extension: default_input_extension(),
            output_dir: default_output_dir(),
            input_encoding: default_input_encoding(),
            output_encoding: default_output_encoding(),
            log_level: LogLevel::default(),
            log_file: default_log_file(),
            issues_log: default_issues_log(),
        }
    }
}
