/*!
 * Error types for the video-config library.
 *
 * This module contains custom error types for the transcript and manifest
 * layers, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while checking transcript assets
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// A transcript reference that cannot be resolved inside the store
    #[error("Invalid transcript reference for '{language}': {reference}")]
    InvalidReference {
        /// Language code the reference was declared under
        language: String,
        /// The offending reference
        reference: String,
    },

    /// The backing store could not be queried
    #[error("Transcript store error: {0}")]
    Store(String),
}

/// Errors that can occur when loading a video manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Error reading the manifest file
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the manifest JSON
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A transcript declared under an unusable language key
    #[error("Invalid transcript language key: '{0}'")]
    InvalidLanguage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the transcript layer
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Error from manifest loading
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
