/*!
 * Tests for pure translation resolution
 */

use std::collections::BTreeSet;
use video_config::{available_translations, TranscriptDescriptor, FALLBACK_LANGUAGE};
use crate::common;

fn set(codes: &[&str]) -> BTreeSet<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// Uploaded German and Croatian transcripts are reported regardless of the flag
#[test]
fn test_available_translations_withMultipleTranscripts_shouldReturnAllKeys() {
    let d = common::descriptor(&[("ge", "subs_grmtran1.srt"), ("hr", "subs_croatian1.srt")]);

    assert_eq!(available_translations(&d, true), set(&["ge", "hr"]));
    assert_eq!(available_translations(&d, false), set(&["ge", "hr"]));
}

#[test]
fn test_available_translations_withNoTranscriptsAndFallback_shouldReturnEnglish() {
    let result = available_translations(&TranscriptDescriptor::new(), true);
    assert_eq!(result, set(&[FALLBACK_LANGUAGE]));
}

#[test]
fn test_available_translations_withNoTranscriptsNoFallback_shouldReturnEmpty() {
    let result = available_translations(&TranscriptDescriptor::new(), false);
    assert!(result.is_empty());
}

/// A video with any transcript never receives the fallback language
#[test]
fn test_available_translations_withoutEnglishKey_shouldNotAddFallback() {
    let d = common::descriptor(&[("es", "es.srt"), ("zh", "zh.srt")]);
    assert_eq!(available_translations(&d, true), set(&["es", "zh"]));
}

#[test]
fn test_available_translations_withEnglishKey_shouldNotDuplicate() {
    let d = common::descriptor(&[("en", "en.srt")]);
    let result = available_translations(&d, true);
    assert_eq!(result.len(), 1);
    assert!(result.contains("en"));
}

/// Codes that are not ISO 639 are passed through untouched
#[test]
fn test_available_translations_withNonIsoCodes_shouldKeepThemVerbatim() {
    let d = common::descriptor(&[("ge", "a.srt"), ("zh_HANS", "b.srt"), ("pt-BR", "c.srt")]);
    assert_eq!(available_translations(&d, false), set(&["ge", "pt-BR", "zh_HANS"]));
}

#[test]
fn test_available_translations_repeatedCalls_shouldBeIdempotent() {
    let d = common::descriptor(&[("fr", "fr.srt"), ("de", "de.srt")]);
    let first = available_translations(&d, true);
    let second = available_translations(&d, true);
    assert_eq!(first, second);

    let empty = TranscriptDescriptor::new();
    assert_eq!(available_translations(&empty, false), available_translations(&empty, false));
    assert_eq!(available_translations(&empty, true), available_translations(&empty, true));
}
