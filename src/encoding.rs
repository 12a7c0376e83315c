//! Character encoding detection and conversion.
//!
//! Aozora Bunko distributes its texts as Shift_JIS, but mirrors and
//! re-packaged corpora often hold UTF-8 or UTF-16 copies. Input bytes are
//! decoded to a `String` before normalization, and the result is encoded
//! again on the way out.
//!
//! Detection priority:
//! 1. BOM (Byte Order Mark)
//! 2. Strict UTF-8 validation
//! 3. chardetng statistical detection, hinted towards Japanese

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use log::debug;

use crate::errors::DecodeError;

/// Label meaning "detect the encoding from the bytes"
pub const AUTO_ENCODING: &str = "auto";

/// UTF-8 BOM: EF BB BF
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
/// UTF-16 LE BOM: FF FE
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
/// UTF-16 BE BOM: FE FF
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text decoded from raw bytes
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The decoded text, BOM removed
    pub text: String,
    /// Encoding the bytes were decoded with
    pub encoding: &'static Encoding,
}

/// Resolve an encoding label such as `"shift_jis"` or `"utf-8"`
pub fn resolve_label(label: &str) -> Result<&'static Encoding, DecodeError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| DecodeError::UnsupportedEncoding(label.to_string()))
}

/// Detect the character encoding of a byte buffer.
pub fn detect_encoding(buffer: &[u8]) -> Result<&'static Encoding, DecodeError> {
    if buffer.is_empty() {
        return Ok(UTF_8);
    }

    if let Some(encoding) = detect_bom(buffer) {
        return Ok(encoding);
    }

    if std::str::from_utf8(buffer).is_ok() {
        return Ok(UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(buffer, true);
    let (encoding, confident) = detector.guess_assess(Some(b"jp".as_slice()), false);
    debug!("chardetng guess: {} (confident: {})", encoding.name(), confident);

    // A guess is only accepted if it decodes the whole buffer cleanly
    let (_, had_errors) = encoding.decode_without_bom_handling(buffer);
    if had_errors {
        return Err(DecodeError::EncodingUndetected);
    }

    Ok(encoding)
}

fn detect_bom(buffer: &[u8]) -> Option<&'static Encoding> {
    if buffer.starts_with(UTF8_BOM) {
        Some(UTF_8)
    } else if buffer.starts_with(UTF16_LE_BOM) {
        Some(UTF_16LE)
    } else if buffer.starts_with(UTF16_BE_BOM) {
        Some(UTF_16BE)
    } else {
        None
    }
}

/// Decode `buffer` using `label`, or by detection when `label` is `"auto"`.
pub fn decode(buffer: &[u8], label: &str) -> Result<DecodedText, DecodeError> {
    let encoding = if label.trim().eq_ignore_ascii_case(AUTO_ENCODING) {
        detect_encoding(buffer)?
    } else {
        resolve_label(label)?
    };

    // A BOM, if any, overrides the chosen encoding
    let (text, used, had_errors) = encoding.decode(buffer);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: used.name().to_string(),
        });
    }

    debug!("charcode: {}", used.name());
    Ok(DecodedText {
        text: text.into_owned(),
        encoding: used,
    })
}

/// Encode `text` with the encoding named by `label`.
///
/// UTF-16 labels encode as UTF-8, following the WHATWG encoding standard.
pub fn encode(text: &str, label: &str) -> Result<Vec<u8>, DecodeError> {
    let encoding = resolve_label(label)?;
    let (bytes, used, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return Err(DecodeError::Unmappable {
            encoding: used.name().to_string(),
        });
    }
    Ok(bytes.into_owned())
}
