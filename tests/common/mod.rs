/*!
 * Common test utilities for the aozora-normalizer test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Separator line used by Aozora Bunko around the notation legend
pub const SEPARATOR: &str = "-------------------------------------------------------";

/// Initialise a test logger; repeated calls are harmless
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given bytes in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small but complete Aozora Bunko document
pub fn sample_document() -> String {
    format!(
        "羅生門\n芥川龍之介\n\n{sep}\n【テキスト中に現れる記号について】\n\n《》：ルビ\n（例）下人《げにん》\n{sep}\n\n　ある日の暮方《くれがた》の事である。\n　［＃５字下げ］一［＃「一」は中見出し］\n　雨はしみ／″＼と降り、こゝろ――いろ／＼に乱れた。｜下人は\n\n\n底本：「芥川龍之介全集１」ちくま文庫、筑摩書房\n入力：平山誠\n",
        sep = SEPARATOR
    )
}

/// Expected normalization of `sample_document`
pub fn sample_document_normalized() -> String {
    "羅生門\n芥川龍之介\n\n\n　ある日の暮方の事である。\n　\n　雨はしみじみと降り、こころいろいろに乱れた。下人は\n\n\n".to_string()
}

/// Shift_JIS bytes for `text`
pub fn to_shift_jis(text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(text);
    bytes.into_owned()
}
