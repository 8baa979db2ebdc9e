use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::errors::TranscriptError;

// @module: Transcript metadata and asset lookup

/// Per-language transcript sources declared on a video.
///
/// Keys are language codes (`"en"`, `"ge"`, `"hr"`); values are opaque
/// references such as a filename or URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranscriptDescriptor(BTreeMap<String, String>);

impl TranscriptDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: impl Into<String>, reference: impl Into<String>) {
        self.0.insert(language.into(), reference.into());
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranscriptDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<BTreeMap<String, String>> for TranscriptDescriptor {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Transcript metadata for one video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptsInfo {
    /// Legacy English subtitle reference; empty when absent
    #[serde(default)]
    pub sub: String,

    /// Uploaded transcripts keyed by language
    #[serde(default)]
    pub transcripts: TranscriptDescriptor,
}

impl TranscriptsInfo {
    pub fn new(sub: impl Into<String>, transcripts: TranscriptDescriptor) -> Self {
        Self {
            sub: sub.into(),
            transcripts,
        }
    }

    pub fn has_sub(&self) -> bool {
        !self.sub.trim().is_empty()
    }
}

/// Lookup of transcript assets behind their declared references
pub trait TranscriptStore: Send + Sync {
    /// Whether the transcript for `language` stored under `reference` exists
    fn transcript_exists(&self, language: &str, reference: &str) -> Result<bool, TranscriptError>;
}

impl<T: TranscriptStore + ?Sized> TranscriptStore for Arc<T> {
    fn transcript_exists(&self, language: &str, reference: &str) -> Result<bool, TranscriptError> {
        (**self).transcript_exists(language, reference)
    }
}

/// Transcript store backed by a directory of uploaded files
#[derive(Debug, Clone)]
pub struct DirectoryTranscriptStore {
    root: PathBuf,
}

impl DirectoryTranscriptStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // @resolves: Reference to a path under the root, rejecting escapes
    fn resolve(&self, language: &str, reference: &str) -> Result<PathBuf, TranscriptError> {
        let relative = Path::new(reference);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if reference.trim().is_empty() || escapes {
            return Err(TranscriptError::InvalidReference {
                language: language.to_string(),
                reference: reference.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

impl TranscriptStore for DirectoryTranscriptStore {
    fn transcript_exists(&self, language: &str, reference: &str) -> Result<bool, TranscriptError> {
        if !self.root.is_dir() {
            return Err(TranscriptError::Store(format!(
                "transcript root is not a directory: {}",
                self.root.display()
            )));
        }

        let path = self.resolve(language, reference)?;
        trace!("Checking transcript asset {:?} for '{}'", path, language);
        Ok(path.is_file())
    }
}
