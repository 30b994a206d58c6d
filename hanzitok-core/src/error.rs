//! Error types for dictionary loading and segmenter construction
//!
//! Segmentation itself never fails: unmatched characters degrade into
//! unknown tokens. Only building the lookup structures can go wrong.

use thiserror::Error;

/// Errors raised while turning a dictionary source into a vocabulary
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The dictionary is not valid JSON
    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object keyed by word id
    #[error("dictionary must be a JSON object keyed by word id, found {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// An entry could not be read as a dictionary entry
    #[error("malformed dictionary entry '{id}': {reason}")]
    MalformedEntry {
        /// Word id of the offending entry
        id: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Errors raised while configuring a segmenter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Invalid segmenter configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for vocabulary operations
pub type Result<T> = std::result::Result<T, VocabularyError>;
