/*!
 * Tests for error types and conversions
 */

use video_config::errors::{AppError, ManifestError, TranscriptError};

#[test]
fn test_transcriptError_invalidReference_shouldDisplayLanguageAndReference() {
    let error = TranscriptError::InvalidReference {
        language: "hr".to_string(),
        reference: "../x.srt".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("'hr'"));
    assert!(display.contains("../x.srt"));
}

#[test]
fn test_manifestError_invalidLanguage_shouldDisplayKey() {
    let error = ManifestError::InvalidLanguage("e n".to_string());
    assert_eq!(format!("{}", error), "Invalid transcript language key: 'e n'");
}

#[test]
fn test_appError_fromTranscriptError_shouldWrapCorrectly() {
    let app_error: AppError = TranscriptError::Store("offline".to_string()).into();
    assert!(matches!(app_error, AppError::Transcript(_)));
    assert!(format!("{}", app_error).contains("offline"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(format!("{}", app_error), "Unknown error: boom");
}
