/*!
 * Aozora Bunko text normalization.
 *
 * This module turns a decoded Aozora Bunko transcription into plain text:
 * - `iteration`: expansion of iteration marks (ゝ, ゞ, ／＼, ／″＼)
 * - `annotation`: removal of the notation legend between separator lines
 * - `markup`: footer, ruby, editorial bracket and stray symbol removal
 * - `kana`: dakuten/handakuten lookup tables
 *
 * The stages run in a fixed order over owned strings; the header split off
 * by the annotation stage bypasses the later stages and is reattached at
 * the end.
 */

pub mod annotation;
pub mod iteration;
pub mod kana;
pub mod markup;

use log::debug;

use crate::errors::NormalizeError;

pub use annotation::{split_annotation, HeaderBody};
pub use iteration::{expand_iteration_marks, IterationMark, ITERATION_MARKS};
pub use markup::{remove_brackets, remove_footer, remove_ruby, remove_symbols};

/// Result of normalizing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Title block, untouched by the body stages
    pub header: String,
    /// Cleaned body text
    pub body: String,
}

impl NormalizedDocument {
    /// Header followed by body, as written to the output file
    pub fn into_text(self) -> String {
        let mut text = self.header;
        text.push_str(&self.body);
        text
    }
}

/// Run every stage over `raw` and return header and body separately
pub fn normalize(raw: &str) -> Result<NormalizedDocument, NormalizeError> {
    let expanded = expand_iteration_marks(raw)?;
    debug!("iteration marks expanded");

    let HeaderBody { header, body } = split_annotation(&expanded)?;
    debug!("annotation block removed");

    let body = remove_footer(&body);
    let body = remove_ruby(body);
    let body = remove_brackets(&body);
    let body = remove_symbols(&body);
    debug!("body markup removed");

    Ok(NormalizedDocument { header, body })
}

/// Normalize `raw` into the final output text
pub fn transform(raw: &str) -> Result<String, NormalizeError> {
    normalize(raw).map(NormalizedDocument::into_text)
}
