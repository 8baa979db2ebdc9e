/*!
 * Video configuration service.
 *
 * Answers which transcript translations a video offers. Feature flags are
 * carried by the service itself rather than read from process-wide settings,
 * so two services with different flags can coexist.
 */

use std::collections::BTreeSet;

use log::{debug, warn};

use crate::app_config::FeatureFlags;
use crate::errors::TranscriptError;
use crate::transcripts::{TranscriptDescriptor, TranscriptStore, TranscriptsInfo};
use crate::translation_resolver::{self, FALLBACK_LANGUAGE};

/// Service resolving transcript translations for video components
pub struct VideoConfigService {
    flags: FeatureFlags,
    store: Option<Box<dyn TranscriptStore>>,
}

impl VideoConfigService {
    /// Create a service without an asset store
    pub fn new(flags: FeatureFlags) -> Self {
        Self { flags, store: None }
    }

    /// Attach the store used to verify transcript assets
    pub fn with_store(mut self, store: Box<dyn TranscriptStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolve translations for a bare descriptor
    pub fn available_translations_for(
        &self,
        descriptor: &TranscriptDescriptor,
        fallback_enabled: bool,
    ) -> BTreeSet<String> {
        translation_resolver::available_translations(descriptor, fallback_enabled)
    }

    /// List the translation languages available for a video.
    ///
    /// `verify_assets` defaults to verifying whenever the video abstraction
    /// layer is disabled. Verified mode only reports languages whose asset
    /// exists in the store; a video declaring nothing still gets the English
    /// fallback when it is enabled. The result is sorted and free of
    /// duplicates.
    pub fn available_translations(
        &self,
        info: &TranscriptsInfo,
        verify_assets: Option<bool>,
    ) -> Result<Vec<String>, TranscriptError> {
        let verify = verify_assets.unwrap_or(!self.flags.enable_video_abstraction_layer_api);

        let translations = match (&self.store, verify) {
            (Some(store), true) => self.verified_translations(&**store, info)?,
            (None, true) => {
                if verify_assets == Some(true) {
                    warn!("Transcript verification requested but no store is configured, trusting declared fields");
                }
                self.declared_translations(info)
            }
            (_, false) => self.declared_translations(info),
        };

        debug!("Resolved {} translation(s): {:?}", translations.len(), translations);
        Ok(translations.into_iter().collect())
    }

    // @returns: Languages as declared, with the legacy sub counted as English
    fn declared_translations(&self, info: &TranscriptsInfo) -> BTreeSet<String> {
        if !info.has_sub() {
            return translation_resolver::available_translations(
                &info.transcripts,
                self.flags.fallback_to_english_transcripts,
            );
        }

        let mut translations = translation_resolver::available_translations(&info.transcripts, false);
        translations.insert(FALLBACK_LANGUAGE.to_string());
        translations
    }

    // @returns: Languages whose transcript asset exists in the store
    fn verified_translations(
        &self,
        store: &dyn TranscriptStore,
        info: &TranscriptsInfo,
    ) -> Result<BTreeSet<String>, TranscriptError> {
        let mut candidates: Vec<(&str, &str)> = info.transcripts.iter().collect();
        if info.has_sub() {
            // The legacy sub wins over an uploaded English transcript.
            candidates.retain(|(language, _)| *language != FALLBACK_LANGUAGE);
            candidates.push((FALLBACK_LANGUAGE, info.sub.as_str()));
        }

        if candidates.is_empty() {
            return Ok(translation_resolver::available_translations(
                &info.transcripts,
                self.flags.fallback_to_english_transcripts,
            ));
        }

        let mut translations = BTreeSet::new();
        for (language, reference) in candidates {
            match store.transcript_exists(language, reference) {
                Ok(true) => {
                    translations.insert(language.to_string());
                }
                Ok(false) => debug!("Transcript for '{}' not found: {}", language, reference),
                Err(e @ TranscriptError::InvalidReference { .. }) => warn!("Skipping transcript: {}", e),
                Err(e) => return Err(e),
            }
        }

        Ok(translations)
    }
}

impl Default for VideoConfigService {
    fn default() -> Self {
        Self::new(FeatureFlags::default())
    }
}
