//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Token mode was requested without a story file
    #[error("Token mode requires: {dict} <INPUT>")]
    MissingInput {
        /// Dictionary path that was given
        dict: String,
    },
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Dictionary could not be loaded
    #[error("Invalid dictionary {path}: {reason}")]
    InvalidDictionary {
        /// Dictionary path
        path: String,
        /// Underlying cause
        reason: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
