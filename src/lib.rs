/*!
 * # aozora-normalizer
 *
 * A Rust library for turning Aozora Bunko transcriptions into plain
 * Japanese text.
 *
 * ## Features
 *
 * - Expansion of iteration marks (ゝ, ゞ, ／＼, ／″＼) into literal kana
 * - Removal of the notation legend, bibliographic footer, ruby glosses,
 *   editorial instructions and stray symbols
 * - Shift_JIS / UTF-8 / UTF-16 input detection and configurable output encoding
 * - Batch processing of whole directories with per-file failure isolation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `normalizer`: The pure text pipeline:
 *   - `normalizer::iteration`: Iteration mark expansion
 *   - `normalizer::kana`: Dakuten/handakuten tables
 *   - `normalizer::annotation`: Header/body split
 *   - `normalizer::markup`: Footer, ruby, bracket and symbol removal
 * - `encoding`: Character set detection and conversion
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Single-file and folder workflows
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod encoding;
pub mod errors;
pub mod file_utils;
pub mod normalizer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchReport, Controller, ProcessOutcome};
pub use errors::{AppError, DecodeError, NormalizeError};
pub use normalizer::{normalize, transform, NormalizedDocument};
