/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use aozora_normalizer::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.txt", b"content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that generate_output_path mirrors the relative path
#[test]
fn test_generate_output_path_withNestedInput_shouldMirrorRelativePath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/corpus/txt/akutagawa/rashomon.txt"),
        Path::new("/corpus/txt"),
        Path::new("/corpus/modify"),
    );

    assert_eq!(output_path, Path::new("/corpus/modify/akutagawa/rashomon.txt"));
}

/// Test that generate_output_path falls back to the file name
#[test]
fn test_generate_output_path_withForeignRoot_shouldUseFileName() {
    let output_path = FileManager::generate_output_path(
        Path::new("/elsewhere/rashomon.txt"),
        Path::new("/corpus/txt"),
        Path::new("modify"),
    );

    assert_eq!(output_path, Path::new("modify/rashomon.txt"));
}

/// Test that ensure_dir creates directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_subdir = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&test_subdir)?;

    assert!(test_subdir.is_dir());
    Ok(())
}

/// Test that find_files filters by extension, case-insensitively, recursively
#[test]
fn test_find_files_withMixedExtensions_shouldReturnMatchesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt", b"a")?;
    common::create_test_file(temp_dir.path(), "B.TXT", b"b")?;
    common::create_test_file(temp_dir.path(), "nested/c.txt", b"c")?;
    common::create_test_file(temp_dir.path(), "d.zip", b"d")?;

    let files = FileManager::find_files(temp_dir.path(), ".txt")?;

    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.extension().is_some_and(|e| e.eq_ignore_ascii_case("txt"))));
    Ok(())
}

/// Test that write_bytes creates parent directories and read_bytes reads back
#[test]
fn test_write_bytes_withMissingParent_shouldCreateAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("doc.txt");

    FileManager::write_bytes(&target, "本文".as_bytes())?;

    assert_eq!(FileManager::read_bytes(&target)?, "本文".as_bytes());
    Ok(())
}

/// Test that append_to_log_file appends timestamped lines
#[test]
fn test_append_to_log_file_withTwoEntries_shouldKeepBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let log_path = temp_dir.path().join("logs").join("access.log");

    FileManager::append_to_log_file(&log_path, "first")?;
    FileManager::append_to_log_file(&log_path, "second")?;

    let content = std::fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('[') && lines[0].ends_with("] first"));
    assert!(lines[1].ends_with("] second"));
    Ok(())
}

/// Test that is_within recognises nested paths
#[test]
fn test_is_within_withNestedPath_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = common::create_test_file(temp_dir.path(), "modify/x.txt", b"x")?;

    assert!(FileManager::is_within(&nested, temp_dir.path().join("modify")));
    assert!(!FileManager::is_within(&nested, temp_dir.path().join("txt")));
    Ok(())
}
