//! Configuration module
//!
//! Optional TOML file passed with `--config`. Every field has a default, so
//! an empty file is valid and command-line flags override what it sets.

use crate::error::CliError;
use anyhow::{Context, Result};
use hanzitok_core::{StoryMetadata, DEFAULT_MAX_WINDOW};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Punctuation configuration
    #[serde(default)]
    pub punctuation: PunctuationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Story metadata written into the envelope
    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        if config.segmentation.max_window == 0 {
            return Err(
                CliError::ConfigError("max_window must be at least 1".to_string()).into(),
            );
        }
        Ok(config)
    }
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Longest window tried at each position
    pub max_window: usize,

    /// Word id attached to priority-name tokens
    pub priority_match_id: Option<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_window: DEFAULT_MAX_WINDOW,
            priority_match_id: None,
        }
    }
}

/// Punctuation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PunctuationConfig {
    /// Characters treated as punctuation on top of the built-in set
    pub extra: String,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Default file for tokenized stories
    pub token_output: PathBuf,

    /// Default file for the hanzi list
    pub hanzi_output: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            token_output: PathBuf::from("output.json"),
            hanzi_output: PathBuf::from("output.txt"),
        }
    }
}

/// Story metadata defaults
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MetadataConfig {
    /// Story identifier
    pub story_id: String,
    /// Title
    pub title: String,
    /// Subtitle
    pub subtitle: String,
    /// Difficulty level
    pub difficulty: u32,
    /// Topic
    pub topic: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        let defaults = StoryMetadata::default();
        Self {
            story_id: defaults.story_id,
            title: defaults.title,
            subtitle: defaults.subtitle,
            difficulty: defaults.difficulty,
            topic: defaults.topic,
        }
    }
}

impl From<&MetadataConfig> for StoryMetadata {
    fn from(config: &MetadataConfig) -> Self {
        Self {
            story_id: config.story_id.clone(),
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            difficulty: config.difficulty,
            topic: config.topic.clone(),
        }
    }
}
