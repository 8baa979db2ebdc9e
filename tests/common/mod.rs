/*!
 * Common test utilities for the video-config test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;
use video_config::TranscriptDescriptor;


/// Manifest matching a video with German and Croatian uploads
pub const MULTI_TRANSCRIPT_MANIFEST: &str = r#"{
    "display_name": "Test Video",
    "transcripts": {
        "ge": "subs_grmtran1.srt",
        "hr": "subs_croatian1.srt"
    }
}"#;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a short SRT transcript file
pub fn create_test_transcript(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.
"#;
    create_test_file(dir, filename, content)
}

/// Builds a descriptor from language/reference pairs
pub fn descriptor(pairs: &[(&str, &str)]) -> TranscriptDescriptor {
    pairs.iter().copied().collect()
}
