/*!
 * # video-config - transcript translation lookup for video components
 *
 * A Rust library that works out which transcript translations a video
 * offers, based on the transcript metadata the video declares.
 *
 * ## Features
 *
 * - Resolve available translation languages from a transcript descriptor
 * - Optional English fallback when no transcripts are declared
 * - Legacy English `sub` track support
 * - Verification of declared transcripts against a transcript store
 * - JSON video manifests and configuration files
 * - ISO 639-1 and ISO 639-2 language code labels
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `translation_resolver`: Pure resolution of translation languages
 * - `transcripts`: Transcript metadata types and asset stores
 * - `video_config_service`: Flag-aware service wrapping the resolver
 * - `manifest`: JSON video manifest loading
 * - `app_config`: Configuration management
 * - `app_controller`: CLI overrides and translation listing
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod manifest;
pub mod transcripts;
pub mod translation_resolver;
pub mod video_config_service;

// Re-export main types for easier usage
pub use app_config::{Config, FeatureFlags};
pub use app_controller::{Controller, RunOverrides, TranslationEntry};
pub use errors::{AppError, ManifestError, TranscriptError};
pub use manifest::VideoManifest;
pub use transcripts::{DirectoryTranscriptStore, TranscriptDescriptor, TranscriptStore, TranscriptsInfo};
pub use translation_resolver::{available_translations, FALLBACK_LANGUAGE};
pub use video_config_service::VideoConfigService;
