//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use hanzitok_core::DictionarySource;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// File reader with existence checks and UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        Self::ensure_exists(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a story, trimming leading and trailing whitespace
    pub fn read_story(path: &Path) -> Result<String> {
        let content = Self::read_text(path)?;
        Ok(content.trim().to_string())
    }

    /// Load and parse a JSON dictionary
    pub fn read_dictionary(path: &Path) -> Result<DictionarySource> {
        Self::ensure_exists(path)?;
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let source = DictionarySource::from_reader(BufReader::new(file)).map_err(|e| {
            CliError::InvalidDictionary {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        log::debug!(
            "Loaded {} dictionary entries from {}",
            source.len(),
            path.display()
        );
        Ok(source)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        Ok(())
    }
}
