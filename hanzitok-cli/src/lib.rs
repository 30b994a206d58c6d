//! hanzitok CLI library
//!
//! This library provides the command-line interface for the hanzitok
//! dictionary-based Chinese segmenter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
