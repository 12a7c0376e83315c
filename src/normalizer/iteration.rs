/*!
 * Iteration mark expansion.
 *
 * Aozora Bunko transcriptions abbreviate repeated kana with iteration marks:
 * `ゝ`/`ゞ` repeat the single preceding character, while the two-line
 * くの字点, written inline as `／＼` (or `／″＼` when voiced), repeats the
 * preceding pair. Each mark is replaced with the literal text it stands for.
 */

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

use crate::errors::NormalizeError;
use super::kana;

/// One row of the iteration mark table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationMark {
    /// Shorthand glyph(s) as they appear in the text
    pub marker: &'static str,
    /// Number of preceding characters the mark repeats
    pub unit_len: usize,
    /// Whether the repeated unit is voiced
    pub voiced: bool,
}

impl IterationMark {
    /// Literal text the mark stands for, given the captured window
    pub fn expansion(&self, window: &str) -> String {
        if self.voiced {
            kana::voice_leading(window)
        } else {
            window.to_string()
        }
    }
}

/// Marks handled by the expander. The markers are disjoint substrings.
pub const ITERATION_MARKS: [IterationMark; 4] = [
    IterationMark { marker: "ゝ", unit_len: 1, voiced: false },
    IterationMark { marker: "ゞ", unit_len: 1, voiced: false },
    IterationMark { marker: "／＼", unit_len: 2, voiced: false },
    IterationMark { marker: "／″＼", unit_len: 2, voiced: true },
];

// @const: Compiled (window)(marker) pattern per table row
static MARK_PATTERNS: Lazy<Vec<(IterationMark, Regex)>> = Lazy::new(|| {
    ITERATION_MARKS
        .iter()
        .map(|mark| {
            let pattern = format!(r"([^\r\n]{{{}}}){}", mark.unit_len, regex::escape(mark.marker));
            (*mark, Regex::new(&pattern).expect("Invalid iteration mark regex"))
        })
        .collect()
});

// @struct: A single match and the text that replaces it
struct ExpansionSpan {
    range: Range<usize>,
    window_len: usize,
    replacement: String,
}

/// Expand every iteration mark in `text`.
///
/// Marks are processed one table row at a time. The first mark that is
/// present but cannot be expanded aborts the whole expansion.
pub fn expand_iteration_marks(text: &str) -> Result<String, NormalizeError> {
    let mut current = text.to_string();
    for (mark, pattern) in MARK_PATTERNS.iter() {
        current = expand_mark(&current, mark, pattern)?;
    }
    Ok(current)
}

fn expand_mark(text: &str, mark: &IterationMark, pattern: &Regex) -> Result<String, NormalizeError> {
    if !text.contains(mark.marker) {
        return Ok(text.to_string());
    }

    let mut current = text.to_string();
    let mut cursor = 0;
    let mut expanded = 0usize;

    // Left to right: the copied unit may be the window of a following mark
    while let Some(span) = next_span(&current, cursor, mark, pattern) {
        trace!("Expanding {} at byte {}: {:?}", mark.marker, span.range.start, span.replacement);
        cursor = span.range.start + span.window_len;
        current.replace_range(span.range, &span.replacement);
        expanded += 1;
    }

    if expanded == 0 {
        return Err(NormalizeError::MarkerExpansionFailed(mark.marker.to_string()));
    }

    debug!("Expanded {} occurrence(s) of {}", expanded, mark.marker);
    Ok(current)
}

fn next_span(text: &str, cursor: usize, mark: &IterationMark, pattern: &Regex) -> Option<ExpansionSpan> {
    let caps = pattern.captures_at(text, cursor)?;
    let whole = caps.get(0)?;
    let window = caps.get(1)?.as_str();

    let mut replacement = String::with_capacity(whole.len());
    replacement.push_str(window);
    replacement.push_str(&mark.expansion(window));

    Some(ExpansionSpan {
        range: whole.range(),
        window_len: window.len(),
        replacement,
    })
}
