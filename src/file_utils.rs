use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use std::fs::OpenOptions;
use std::io::Write;
use chrono::Local;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path for a normalized text
    // @params: input_file, input_root, output_dir
    /// The input's path relative to `input_root` is mirrored under
    /// `output_dir`. Files outside `input_root` land directly in `output_dir`.
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>, P3: AsRef<Path>>(
        input_file: P1,
        input_root: P2,
        output_dir: P3,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        match input_file.strip_prefix(input_root.as_ref()) {
            Ok(relative) if !relative.as_os_str().is_empty() => output_dir.join(relative),
            _ => {
                let file_name = input_file.file_name().unwrap_or_default();
                output_dir.join(file_name)
            }
        }
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file's raw bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        fs::read(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write bytes to a file, creating the parent directory if needed
    pub fn write_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Append content to a log file with timestamp
    pub fn append_to_log_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        // Open file in append mode, create if it doesn't exist
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;

        writeln!(file, "[{}] {}", timestamp, content)
            .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Whether `path` lies inside `dir`, comparing canonical paths when possible
    pub fn is_within<P1: AsRef<Path>, P2: AsRef<Path>>(path: P1, dir: P2) -> bool {
        let path = path.as_ref();
        let dir = dir.as_ref();
        match (path.canonicalize(), dir.canonicalize()) {
            (Ok(path), Ok(dir)) => path.starts_with(dir),
            _ => path.starts_with(dir),
        }
    }
}
