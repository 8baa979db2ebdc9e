use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, LogLevel};
use crate::errors::AppError;
use crate::language_utils::{self, LanguageCodeType};
use crate::manifest::VideoManifest;
use crate::transcripts::DirectoryTranscriptStore;
use crate::video_config_service::VideoConfigService;

// @module: Application controller for translation listing

/// Command line choices layered over the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    /// Disable the English fallback regardless of the config file
    pub no_fallback: bool,

    /// Force transcript asset verification
    pub verify_assets: bool,

    /// Force trusting declared transcript fields
    pub trust_fields: bool,

    /// Transcript directory replacing the configured one
    pub transcript_root: Option<PathBuf>,

    /// Log level replacing the configured one
    pub log_level: Option<LogLevel>,
}

impl RunOverrides {
    // @mutates: Config with every override that was given
    pub fn apply(&self, config: &mut Config) {
        if self.no_fallback {
            config.features.fallback_to_english_transcripts = false;
        }
        if let Some(root) = &self.transcript_root {
            config.transcript_root = Some(root.clone());
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }

    /// Verification choice for the service; `None` leaves it to the feature flags.
    /// Verification wins when both flags are set.
    pub fn verify_mode(&self) -> Option<bool> {
        match (self.verify_assets, self.trust_fields) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// One available translation with its ISO classification
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationEntry {
    pub code: String,
    pub code_type: Option<LanguageCodeType>,
    pub name: Option<String>,
}

impl TranslationEntry {
    pub fn from_code(code: &str) -> Self {
        let code_type = language_utils::validate_language_code(code).ok();
        let name = code_type.and_then(|_| language_utils::get_language_name(code).ok());

        Self {
            code: code.to_string(),
            code_type,
            name,
        }
    }

    pub fn is_iso(&self) -> bool {
        self.code_type.is_some()
    }

    // @returns: Tab separated code and label
    pub fn to_line(&self) -> String {
        match &self.name {
            Some(name) => format!("{}\t{}", self.code, name),
            None => format!("{}\t(non-ISO code)", self.code),
        }
    }
}

/// Main application controller for translation listing
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Service built from the configuration
    service: VideoConfigService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let mut service = VideoConfigService::new(config.features.clone());
        if let Some(root) = &config.transcript_root {
            debug!("Using transcript root {:?}", root);
            service = service.with_store(Box::new(DirectoryTranscriptStore::new(root)));
        }

        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &VideoConfigService {
        &self.service
    }

    /// Resolve the translations offered by the video described in `manifest_path`
    pub fn translations(
        &self,
        manifest_path: &Path,
        verify_assets: Option<bool>,
    ) -> Result<Vec<TranslationEntry>, AppError> {
        let manifest = VideoManifest::load(manifest_path)?;
        info!("Resolving translations for '{}'", manifest.display_name);

        let codes = self
            .service
            .available_translations(&manifest.transcripts_info(), verify_assets)?;

        Ok(codes.iter().map(|code| TranslationEntry::from_code(code)).collect())
    }

    /// Render entries as `code<TAB>name` lines or as a JSON array of codes
    pub fn render(entries: &[TranslationEntry], json: bool) -> Result<String, AppError> {
        if json {
            let codes: Vec<&str> = entries.iter().map(|e| e.code.as_str()).collect();
            return serde_json::to_string(&codes).map_err(|e| AppError::Unknown(e.to_string()));
        }

        Ok(entries
            .iter()
            .map(TranslationEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
