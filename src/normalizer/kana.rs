/*!
 * Kana voicing tables.
 *
 * Pure lookups from a plain kana to its dakuten (voiced) or handakuten
 * (half-voiced) counterpart, for both hiragana and katakana.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

// @const: (plain, voiced) pairs
const DAKUTEN_PAIRS: &[(char, char)] = &[
    // Hiragana
    ('か', 'が'), ('き', 'ぎ'), ('く', 'ぐ'), ('け', 'げ'), ('こ', 'ご'),
    ('さ', 'ざ'), ('し', 'じ'), ('す', 'ず'), ('せ', 'ぜ'), ('そ', 'ぞ'),
    ('た', 'だ'), ('ち', 'ぢ'), ('つ', 'づ'), ('て', 'で'), ('と', 'ど'),
    ('は', 'ば'), ('ひ', 'び'), ('ふ', 'ぶ'), ('へ', 'べ'), ('ほ', 'ぼ'),
    ('う', 'ゔ'), ('ゝ', 'ゞ'),
    // Katakana
    ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'), ('ケ', 'ゲ'), ('コ', 'ゴ'),
    ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'),
    ('タ', 'ダ'), ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'),
    ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'), ('ホ', 'ボ'),
    ('ウ', 'ヴ'), ('ワ', 'ヷ'), ('ヰ', 'ヸ'), ('ヱ', 'ヹ'), ('ヲ', 'ヺ'),
    ('ヽ', 'ヾ'),
];

// @const: (plain, half-voiced) pairs
const HANDAKUTEN_PAIRS: &[(char, char)] = &[
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
];

static DAKUTEN_TABLE: Lazy<HashMap<char, char>> =
    Lazy::new(|| DAKUTEN_PAIRS.iter().copied().collect());

static HANDAKUTEN_TABLE: Lazy<HashMap<char, char>> =
    Lazy::new(|| HANDAKUTEN_PAIRS.iter().copied().collect());

/// Voiced form of `c`, or `c` itself when it has none
pub fn to_dakuten(c: char) -> char {
    DAKUTEN_TABLE.get(&c).copied().unwrap_or(c)
}

/// Half-voiced form of `c`, or `c` itself when it has none
pub fn to_handakuten(c: char) -> char {
    HANDAKUTEN_TABLE.get(&c).copied().unwrap_or(c)
}

/// Returns `unit` with its first character voiced.
///
/// Voiced repeat marks sound the head of the repeated unit
/// (`しみ` → `じみ`), so only the leading kana is converted.
pub fn voice_leading(unit: &str) -> String {
    let mut chars = unit.chars();
    match chars.next() {
        Some(first) => {
            let mut voiced = String::with_capacity(unit.len());
            voiced.push(to_dakuten(first));
            voiced.extend(chars);
            voiced
        }
        None => String::new(),
    }
}
