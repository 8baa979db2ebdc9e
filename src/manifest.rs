use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ManifestError;
use crate::transcripts::{TranscriptDescriptor, TranscriptsInfo};

/// Video component description loaded from JSON
///
/// ```json
/// {
///   "display_name": "Test Video",
///   "sub": "",
///   "transcripts": { "ge": "subs_grmtran1.srt", "hr": "subs_croatian1.srt" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoManifest {
    /// Human readable name of the video
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Legacy English subtitle reference
    #[serde(default)]
    pub sub: String,

    /// Transcript references keyed by language code
    #[serde(default)]
    pub transcripts: BTreeMap<String, String>,

    /// Identifier in the external video pipeline, if any
    #[serde(default)]
    pub edx_video_id: Option<String>,
}

fn default_display_name() -> String {
    "Video".to_string()
}

impl VideoManifest {
    /// Parse and validate a manifest from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        debug!("Loading video manifest from {:?}", path);

        let reader = BufReader::new(File::open(path)?);
        let manifest: Self = serde_json::from_reader(reader)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject language keys that cannot name a transcript.
    ///
    /// Codes are not checked against ISO 639: authors may declare any code.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for language in self.transcripts.keys() {
            if language.trim().is_empty() || language.chars().any(char::is_whitespace) {
                return Err(ManifestError::InvalidLanguage(language.clone()));
            }
        }
        Ok(())
    }

    /// Transcript metadata with blank references dropped
    pub fn transcripts_info(&self) -> TranscriptsInfo {
        let transcripts: TranscriptDescriptor = self
            .transcripts
            .iter()
            .filter(|(_, reference)| !reference.trim().is_empty())
            .map(|(language, reference)| (language.as_str(), reference.as_str()))
            .collect();

        TranscriptsInfo::new(self.sub.trim(), transcripts)
    }
}
