//! Token type produced by the segmenter

use serde::{Deserialize, Serialize};

/// One segment of the input text.
///
/// `id` is the dictionary word id for vocabulary matches and `None` for
/// punctuation, unknown characters and (by default) priority names. It
/// serializes as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Word id, if any
    pub id: Option<String>,
    /// Matched text exactly as it appeared in the input
    pub text: String,
}

impl Token {
    /// Token carrying a word id
    pub fn known(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: text.into(),
        }
    }

    /// Token without a word id
    pub fn unknown(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }
}
