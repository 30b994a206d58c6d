//! Diagnostics emitted during segmentation
//!
//! A [`Reporter`] is a side channel. It sees every priority-name match as it
//! happens and the unmatched runs once the scan is done, but it cannot
//! influence the tokens.

use std::fmt;

/// Receiver of segmentation diagnostics
pub trait Reporter {
    /// A priority name was matched at the current scan position
    fn priority_match(&mut self, chunk: &str);

    /// The scan finished with at least one unmatched run
    fn unmatched_runs(&mut self, runs: &[String]);
}

/// Join unmatched runs into the single warning line text
pub fn format_unmatched(runs: &[String]) -> String {
    runs.join(", ")
}

/// Reporter that writes to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn priority_match(&mut self, chunk: &str) {
        log::info!("Character Name Tokenized: {chunk}");
    }

    fn unmatched_runs(&mut self, runs: &[String]) {
        log::warn!("All Unknown Hanzi: {}", format_unmatched(runs));
    }
}

/// Severity of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational notice
    Info,
    /// Warning
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
        }
    }
}

/// One recorded diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity tag
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Reporter that keeps diagnostics in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingReporter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Recorded warnings only
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warn)
    }

    /// Consume the recorder
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for RecordingReporter {
    fn priority_match(&mut self, chunk: &str) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Info,
            message: format!("Character Name Tokenized: {chunk}"),
        });
    }

    fn unmatched_runs(&mut self, runs: &[String]) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warn,
            message: format!("All Unknown Hanzi: {}", format_unmatched(runs)),
        });
    }
}
