/*!
 * Annotation block removal.
 *
 * An Aozora Bunko file opens with the title block, followed by a legend of
 * the notation symbols enclosed between two hyphen separator lines. The
 * legend is discarded; the title block is kept as the header.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::NormalizeError;

// @const: Separator line, line break included
static SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^-{5,}[ \t]*(?:\r?\n|\z)").expect("Invalid separator regex")
});

/// Header and body of a document once the annotation block is gone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBody {
    /// Everything before the first separator line
    pub header: String,
    /// Everything after the second separator line
    pub body: String,
}

/// Number of separator lines in `text`
pub fn count_separators(text: &str) -> usize {
    SEPARATOR_REGEX.find_iter(text).count()
}

/// Split `text` into header and body, dropping the annotation block.
///
/// Fails with `MalformedAnnotationBlock` unless at least two separator
/// lines are present.
pub fn split_annotation(text: &str) -> Result<HeaderBody, NormalizeError> {
    let mut parts = SEPARATOR_REGEX.splitn(text, 3);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(_annotation), Some(body)) => Ok(HeaderBody {
            header: header.to_string(),
            body: body.to_string(),
        }),
        _ => Err(NormalizeError::MalformedAnnotationBlock {
            found: count_separators(text),
        }),
    }
}
