/*!
 * Single-pass cleanup stages applied to the document body.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker introducing the bibliographic footer ("source edition:")
pub const FOOTER_MARKER: &str = "底本：";

/// Literal symbols stripped from the body: ruby start bar and dash runs
pub const STRAY_SYMBOLS: [&str; 2] = ["｜", "――"];

// @const: Ruby gloss, shortest match within a line
static RUBY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"《.+?》").expect("Invalid ruby regex")
});

// @const: Editorial instruction, greedy within a line
static BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"［＃.*］").expect("Invalid bracket regex")
});

/// Text preceding the first footer marker, or the whole text if absent
pub fn remove_footer(text: &str) -> &str {
    match text.find(FOOTER_MARKER) {
        Some(index) => &text[..index],
        None => text,
    }
}

/// Strip every `《…》` ruby gloss
pub fn remove_ruby(text: &str) -> String {
    RUBY_REGEX.replace_all(text, "").into_owned()
}

/// Strip every `［＃…］` editorial instruction
pub fn remove_brackets(text: &str) -> String {
    BRACKET_REGEX.replace_all(text, "").into_owned()
}

/// Strip the stray symbols
pub fn remove_symbols(text: &str) -> String {
    STRAY_SYMBOLS
        .iter()
        .fold(text.to_string(), |acc, symbol| acc.replace(symbol, ""))
}
