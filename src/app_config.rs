//! Application configuration module
//!
//! This module handles the application configuration including loading,
//! validating and saving configuration settings.

use anyhow::{anyhow, Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Feature flags that change translation resolution
    #[serde(default)]
    pub features: FeatureFlags,

    /// Directory holding uploaded transcript files
    #[serde(default)]
    pub transcript_root: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Feature flags read at resolution time
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FeatureFlags {
    /// Offer English when a video declares no transcripts.
    ///
    /// Some organizations don't have English transcripts for all videos,
    /// so this is configurable.
    #[serde(default = "default_true")]
    pub fallback_to_english_transcripts: bool,

    /// When disabled, declared transcripts are checked against the
    /// transcript store unless the caller says otherwise
    #[serde(default)]
    pub enable_video_abstraction_layer_api: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            fallback_to_english_transcripts: true,
            enable_video_abstraction_layer_api: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Load the configuration, creating a default file if none exists
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(root) = &self.transcript_root {
            if !root.is_dir() {
                return Err(anyhow!("Transcript root is not a directory: {}", root.display()));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            features: FeatureFlags::default(),
            transcript_root: None,
            log_level: LogLevel::default(),
        }
    }
}
