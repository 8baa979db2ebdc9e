/*!
 * End-to-end tests from manifest and config files to translation lists
 */

use anyhow::Result;
use video_config::{Config, DirectoryTranscriptStore, VideoConfigService, VideoManifest};
use crate::common;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_workflow_withMultipleTranscripts_shouldListUploadedLanguages() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let manifest_path = common::create_test_file(temp_dir.path(), "video.json", common::MULTI_TRANSCRIPT_MANIFEST)?;

    let manifest = VideoManifest::load(&manifest_path)?;
    let service = VideoConfigService::new(Config::default().features);
    let translations = service.available_translations(&manifest.transcripts_info(), None)?;

    assert_eq!(translations, vec!["ge", "hr"]);
    Ok(())
}

/// Disabling the fallback in the config file removes English for bare videos
#[test]
fn test_workflow_withFallbackDisabledInConfig_shouldReturnNothing() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "video_config.json",
        r#"{"features": {"fallback_to_english_transcripts": false}}"#,
    )?;
    let manifest_path = common::create_test_file(temp_dir.path(), "video.json", r#"{"display_name": "Bare"}"#)?;

    let manifest = VideoManifest::load(&manifest_path)?;
    let info = manifest.transcripts_info();

    let default_service = VideoConfigService::new(Config::default().features);
    assert_eq!(default_service.available_translations(&info, None)?, vec!["en"]);

    let config = Config::load(&config_path)?;
    let service = VideoConfigService::new(config.features);
    assert!(service.available_translations(&info, None)?.is_empty());
    Ok(())
}

#[test]
fn test_workflow_withTranscriptRoot_shouldVerifyUploadedFiles() -> Result<()> {
    init_logging();
    let temp_dir = common::create_temp_dir()?;
    let static_dir = temp_dir.path().join("static");
    std::fs::create_dir(&static_dir)?;
    common::create_test_transcript(&static_dir, "subs_grmtran1.srt")?;

    let mut config = Config::default();
    config.transcript_root = Some(static_dir.clone());
    config.validate()?;

    let manifest = VideoManifest::from_json_str(common::MULTI_TRANSCRIPT_MANIFEST)?;
    let service = VideoConfigService::new(config.features.clone())
        .with_store(Box::new(DirectoryTranscriptStore::new(&static_dir)));

    assert_eq!(service.available_translations(&manifest.transcripts_info(), None)?, vec!["ge"]);
    assert_eq!(
        service.available_translations(&manifest.transcripts_info(), Some(false))?,
        vec!["ge", "hr"]
    );
    Ok(())
}
