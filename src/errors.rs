/*!
 * Error types for the aozora-normalizer application.
 *
 * This module contains custom error types for the normalization core and
 * its collaborators, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced by the normalization pipeline on malformed input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The annotation separator line was not found the required two times
    #[error("Malformed annotation block: expected at least 2 separator lines, found {found}")]
    MalformedAnnotationBlock {
        /// Number of separator lines actually found
        found: usize,
    },

    /// An iteration mark is present but never in an expandable position
    #[error("Iteration mark expansion failed for marker '{0}': no preceding text to repeat")]
    MarkerExpansionFailed(String),
}

/// Errors from decoding input bytes or encoding output text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The character set of the input could not be identified
    #[error("Could not detect the character encoding of the input")]
    EncodingUndetected,

    /// The configured encoding label is not known to encoding_rs
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Input bytes are not valid in the explicitly requested encoding
    #[error("Input is not valid {encoding}")]
    Malformed {
        /// Name of the encoding used to decode
        encoding: String,
    },

    /// The output text contains characters the target encoding cannot represent
    #[error("Text contains characters that cannot be encoded as {encoding}")]
    Unmappable {
        /// Name of the output encoding
        encoding: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the normalization pipeline
    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Error from decoding or encoding
    #[error("Encoding error: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
