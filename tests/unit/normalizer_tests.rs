/*!
 * Tests for the normalization pipeline
 */

use aozora_normalizer::normalizer::{
    self, expand_iteration_marks, remove_brackets, remove_footer, remove_ruby, remove_symbols,
    split_annotation, ITERATION_MARKS,
};
use aozora_normalizer::normalizer::kana;
use aozora_normalizer::NormalizeError;
use crate::common;

/// Text without marks passes the expansion stage unchanged
#[test]
fn test_expand_withoutMarks_shouldBeIdentity() {
    let text = "　下人は、大きな嚏《くさめ》をして、それから、大儀そうに立上った。\r\n";
    assert_eq!(expand_iteration_marks(text).unwrap(), text);
}

/// Every unvoiced single mark doubles the preceding character
#[test]
fn test_expand_withSingleMarkAfterAnyChar_shouldDoubleIt() {
    for c in ['あ', 'か', 'ア', '時', 'a'] {
        let input = format!("{c}ゝ");
        assert_eq!(expand_iteration_marks(&input).unwrap(), format!("{c}{c}"));
    }
}

/// The voiced pair mark repeats the window with its head voiced
#[test]
fn test_expand_withVoicedPairMark_shouldNotCopyLiterally() {
    let expanded = expand_iteration_marks("さま／″＼な").unwrap();
    assert_eq!(expanded, "さまざまな");
    assert_ne!(expanded, "さまさまな");
}

/// Voiced pair mark after kana without a voiced form copies the pair
#[test]
fn test_expand_withVoicedPairMarkAfterUnvoiceableKana_shouldCopyPair() {
    assert_eq!(expand_iteration_marks("なみ／″＼").unwrap(), "なみなみ");
}

/// The table covers the four marks with their unit lengths
#[test]
fn test_iteration_marks_table_shouldListFourMarks() {
    let markers: Vec<&str> = ITERATION_MARKS.iter().map(|m| m.marker).collect();
    assert_eq!(markers, vec!["ゝ", "ゞ", "／＼", "／″＼"]);
    assert_eq!(ITERATION_MARKS.iter().filter(|m| m.voiced).count(), 1);
    assert!(ITERATION_MARKS.iter().all(|m| m.unit_len == 1 || m.unit_len == 2));
}

/// A mark with nothing before it names the failing marker
#[test]
fn test_expand_withMarkAtStart_shouldReportMarker() {
    match expand_iteration_marks("／″＼から") {
        Err(NormalizeError::MarkerExpansionFailed(marker)) => assert_eq!(marker, "／″＼"),
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Kana voicing is available independently of the expander
#[test]
fn test_kana_tables_withKnownPairs_shouldConvert() {
    assert_eq!(kana::to_dakuten('か'), 'が');
    assert_eq!(kana::to_dakuten('さ'), 'ざ');
    assert_eq!(kana::to_handakuten('ひ'), 'ぴ');
    assert_eq!(kana::to_dakuten('ん'), 'ん');
}

/// Exactly two separators give the exact preamble and trailing segment
#[test]
fn test_split_annotation_withTwoSeparators_shouldReturnExactParts() {
    let text = format!("題名\n作者\n{sep}\n記号\n{sep}\n本文です。", sep = common::SEPARATOR);
    let split = split_annotation(&text).unwrap();
    assert_eq!(split.header, "題名\n作者\n");
    assert_eq!(split.body, "本文です。");
}

/// Fewer than two separators is a malformed document
#[test]
fn test_split_annotation_withOneSeparator_shouldFail() {
    let text = format!("題名\n{sep}\n本文", sep = common::SEPARATOR);
    assert!(matches!(
        split_annotation(&text),
        Err(NormalizeError::MalformedAnnotationBlock { found: 1 })
    ));
}

/// Footer removal without the marker keeps every byte
#[test]
fn test_remove_footer_withoutMarker_shouldReturnTextUnchanged() {
    let text = "本文\r\n\r\n入力：誰か\r\n";
    assert_eq!(remove_footer(text).as_bytes(), text.as_bytes());
}

/// Bracket removal over cleaned text is a no-op
#[test]
fn test_remove_brackets_onCleanedText_shouldBeIdempotent() {
    let cleaned = remove_brackets("［＃ページの左右中央］\n　本文［＃「本文」に傍点］です。\n");
    assert_eq!(cleaned, "\n　本文です。\n");
    assert_eq!(remove_brackets(&cleaned), cleaned);
}

/// Ruby spans do not cross line breaks
#[test]
fn test_remove_ruby_withUnclosedGloss_shouldLeaveLineAlone() {
    assert_eq!(remove_ruby("開き《ひらき\n閉じ》"), "開き《ひらき\n閉じ》");
}

/// Symbol removal handles both targets in any order
#[test]
fn test_remove_symbols_withBothTargets_shouldStripAll() {
    assert_eq!(remove_symbols("――｜青空《あおぞら》――"), "青空《あおぞら》");
}

/// The short end-to-end document is stripped literally
#[test]
fn test_transform_withShortDocument_shouldMatchExpected() {
    let input = "Title\n-------\nnote\n-------\nBody with 《ruby》 and ［＃note］ text｜here";
    let output = normalizer::transform(input).unwrap();
    assert_eq!(output, "Title\nBody with  and  texthere");
}

/// A full sample document goes through every stage
#[test]
fn test_transform_withSampleDocument_shouldProduceCleanText() {
    common::init_logger();
    let output = normalizer::transform(&common::sample_document()).unwrap();
    assert_eq!(output, common::sample_document_normalized());
}

/// Expansion happens before the split, so a bad mark in the legend still fails
#[test]
fn test_transform_withMarkOnlyAtLineStart_shouldFail() {
    let input = format!("題\n{sep}\nゝ：繰り返し\n{sep}\n本文", sep = common::SEPARATOR);
    assert_eq!(
        normalizer::transform(&input),
        Err(NormalizeError::MarkerExpansionFailed("ゝ".to_string()))
    );
}

/// Header and body are returned separately
#[test]
fn test_normalize_shouldKeepHeaderSeparate() {
    let doc = normalizer::normalize(&common::sample_document()).unwrap();
    assert_eq!(doc.header, "羅生門\n芥川龍之介\n\n");
    assert!(doc.body.starts_with("\n　ある日の暮方の事である。"));
    assert!(!doc.body.contains("底本"));
}
