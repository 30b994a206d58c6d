//! Vocabulary table and dictionary source
//!
//! A dictionary is a JSON object keyed by word id:
//!
//! ```json
//! {
//!   "w00001": { "hanzi": "我", "pinyin": "wǒ" },
//!   "w00002": { "hanzi": "你好" }
//! }
//! ```
//!
//! Only the `hanzi` field is read. Entry order is preserved so that when two
//! ids share a surface form, the later one wins in the [`Vocabulary`].

use crate::error::{Result, VocabularyError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// One dictionary entry as it appears in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Surface form looked up in the text
    pub hanzi: String,
}

/// Parsed dictionary in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySource {
    entries: Vec<(String, DictionaryEntry)>,
}

impl DictionarySource {
    /// Create a source from `(id, entry)` pairs in order
    pub fn new(entries: Vec<(String, DictionaryEntry)>) -> Self {
        Self { entries }
    }

    /// Parse a dictionary from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Parse a dictionary from a reader producing JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(VocabularyError::NotAnObject {
                    found: json_type_name(&other),
                })
            }
        };

        let mut entries = Vec::with_capacity(map.len());
        for (id, raw) in map {
            let entry: DictionaryEntry =
                serde_json::from_value(raw).map_err(|e| VocabularyError::MalformedEntry {
                    id: id.clone(),
                    reason: e.to_string(),
                })?;
            entries.push((id, entry));
        }

        log::debug!("Parsed {} dictionary entries", entries.len());
        Ok(Self { entries })
    }

    /// Entries in source order
    pub fn entries(&self) -> &[(String, DictionaryEntry)] {
        &self.entries
    }

    /// Surface forms in source order, duplicates included
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, entry)| entry.hanzi.as_str())
    }

    /// Ids of entries whose surface form is empty; they can never match
    pub fn empty_entries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.hanzi.is_empty())
            .map(|(id, _)| id.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the source has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the lookup table
    pub fn to_vocabulary(&self) -> Vocabulary {
        Vocabulary::from_entries(
            self.entries
                .iter()
                .map(|(id, entry)| (id.as_str(), entry.hanzi.as_str())),
        )
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Surface form to word id lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    by_surface: HashMap<String, String>,
    longest: usize,
}

impl Vocabulary {
    /// Build from `(id, surface)` pairs.
    ///
    /// A surface form seen more than once keeps the id of its last entry.
    pub fn from_entries<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        let mut by_surface = HashMap::new();
        let mut longest = 0;
        for (id, surface) in entries {
            let surface = surface.into();
            longest = longest.max(surface.chars().count());
            by_surface.insert(surface, id.into());
        }
        Self {
            by_surface,
            longest,
        }
    }

    /// Look up the word id for a surface form
    #[inline]
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.by_surface.get(surface).map(String::as_str)
    }

    /// Check if a surface form is known
    #[inline]
    pub fn contains(&self, surface: &str) -> bool {
        self.by_surface.contains_key(surface)
    }

    /// Number of distinct surface forms
    pub fn len(&self) -> usize {
        self.by_surface.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.by_surface.is_empty()
    }

    /// Length in chars of the longest surface form
    pub fn longest_form(&self) -> usize {
        self.longest
    }

    /// Surface forms longer than `max_window` chars, which can never match
    pub fn unreachable_forms(&self, max_window: usize) -> Vec<&str> {
        let mut forms: Vec<&str> = self
            .by_surface
            .keys()
            .filter(|surface| surface.chars().count() > max_window)
            .map(String::as_str)
            .collect();
        forms.sort_unstable();
        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "w00001": { "hanzi": "我", "pinyin": "wǒ", "english": "I" },
        "w00002": { "hanzi": "你好" },
        "w00003": { "hanzi": "中华人民共和国" }
    }"#;

    #[test]
    fn test_parse_keeps_source_order() {
        let source = DictionarySource::from_json_str(SAMPLE).unwrap();
        let forms: Vec<&str> = source.surface_forms().collect();
        assert_eq!(forms, vec!["我", "你好", "中华人民共和国"]);
        assert_eq!(source.entries()[1].0, "w00002");
    }

    #[test]
    fn test_parse_order_is_not_key_order() {
        let json = r#"{ "w9": { "hanzi": "九" }, "w1": { "hanzi": "一" } }"#;
        let source = DictionarySource::from_json_str(json).unwrap();
        let forms: Vec<&str> = source.surface_forms().collect();
        assert_eq!(forms, vec!["九", "一"]);
    }

    #[test]
    fn test_vocabulary_lookup() {
        let vocab = DictionarySource::from_json_str(SAMPLE)
            .unwrap()
            .to_vocabulary();
        assert_eq!(vocab.get("我"), Some("w00001"));
        assert_eq!(vocab.get("你好"), Some("w00002"));
        assert_eq!(vocab.get("你"), None);
        assert!(vocab.contains("中华人民共和国"));
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.longest_form(), 7);
    }

    #[test]
    fn test_duplicate_surface_form_last_entry_wins() {
        let json = r#"{
            "w1": { "hanzi": "好" },
            "w2": { "hanzi": "好" }
        }"#;
        let source = DictionarySource::from_json_str(json).unwrap();
        assert_eq!(source.len(), 2);

        let vocab = source.to_vocabulary();
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get("好"), Some("w2"));
    }

    #[test]
    fn test_from_entries_last_wins() {
        let vocab = Vocabulary::from_entries([("a", "他"), ("b", "她"), ("c", "他")]);
        assert_eq!(vocab.get("他"), Some("c"));
        assert_eq!(vocab.get("她"), Some("b"));
    }

    #[test]
    fn test_unreachable_forms() {
        let vocab = Vocabulary::from_entries([
            ("a", "我"),
            ("b", "中华人民共和国"),
            ("c", "图书馆员"),
            ("d", "一二三四五"),
        ]);
        assert_eq!(
            vocab.unreachable_forms(4),
            vec!["一二三四五", "中华人民共和国"]
        );
        assert!(vocab.unreachable_forms(7).is_empty());
    }

    #[test]
    fn test_not_an_object() {
        let err = DictionarySource::from_json_str(r#"["我", "你"]"#).unwrap_err();
        assert!(matches!(err, VocabularyError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_missing_hanzi_field() {
        let err = DictionarySource::from_json_str(r#"{ "w1": { "pinyin": "wǒ" } }"#).unwrap_err();
        match err {
            VocabularyError::MalformedEntry { id, reason } => {
                assert_eq!(id, "w1");
                assert!(reason.contains("hanzi"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entry_not_an_object() {
        let err = DictionarySource::from_json_str(r#"{ "w1": "我" }"#).unwrap_err();
        assert!(matches!(err, VocabularyError::MalformedEntry { .. }));
    }

    #[test]
    fn test_empty_hanzi_accepted() {
        let json = r#"{ "w1": { "hanzi": "我" }, "w2": { "hanzi": "" }, "w3": { "hanzi": "你" } }"#;
        let source = DictionarySource::from_json_str(json).unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.surface_forms().collect::<Vec<_>>(), vec!["我", "", "你"]);
        assert_eq!(source.empty_entries().collect::<Vec<_>>(), vec!["w2"]);

        let vocab = source.to_vocabulary();
        assert_eq!(vocab.get("我"), Some("w1"));
        assert_eq!(vocab.longest_form(), 1);
    }

    #[test]
    fn test_no_empty_entries() {
        let source = DictionarySource::from_json_str(SAMPLE).unwrap();
        assert_eq!(source.empty_entries().count(), 0);
    }

    #[test]
    fn test_invalid_json() {
        let err = DictionarySource::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, VocabularyError::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let source = DictionarySource::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_empty_object() {
        let source = DictionarySource::from_json_str("{}").unwrap();
        assert!(source.is_empty());
        assert!(source.to_vocabulary().is_empty());
    }
}
