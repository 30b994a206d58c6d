//! Story document envelope
//!
//! The tokens are wrapped with story metadata that the segmenter never
//! looks at. Callers fill the metadata in; by default it is empty with a
//! difficulty of 1.

use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Default difficulty level for a new story
pub const DEFAULT_DIFFICULTY: u32 = 1;

/// Metadata carried alongside the tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMetadata {
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

impl Default for StoryMetadata {
    fn default() -> Self {
        Self {
            story_id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            difficulty: DEFAULT_DIFFICULTY,
            topic: String::new(),
        }
    }
}

/// Serializable story: metadata fields followed by the token list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDocument {
    /// Pass-through metadata
    #[serde(flatten)]
    pub metadata: StoryMetadata,
    /// Tokens in input order
    pub tokens: Vec<Token>,
}

impl StoryDocument {
    /// Wrap tokens with default metadata
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            metadata: StoryMetadata::default(),
            tokens,
        }
    }

    /// Replace the metadata
    pub fn with_metadata(mut self, metadata: StoryMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Pretty JSON with two-space indentation and literal non-ASCII text
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Compact single-line JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
