//! Unmatched-run accumulation
//!
//! Collects maximal groups of consecutive characters that matched nothing
//! and are not punctuation. One accumulator belongs to exactly one scan.

/// Open run plus closed runs in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmatchedRuns {
    open: String,
    closed: Vec<String>,
}

impl UnmatchedRuns {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character to the open run, opening one if needed
    #[inline]
    pub fn append(&mut self, ch: char) {
        self.open.push(ch);
    }

    /// Close the open run. No-op when nothing is open.
    #[inline]
    pub fn flush(&mut self) {
        if !self.open.is_empty() {
            self.closed.push(std::mem::take(&mut self.open));
        }
    }

    /// Whether a run is currently open
    pub fn has_open_run(&self) -> bool {
        !self.open.is_empty()
    }

    /// Runs closed so far
    pub fn closed(&self) -> &[String] {
        &self.closed
    }

    /// Close any open run and return all runs
    pub fn finalize(mut self) -> Vec<String> {
        self.flush();
        self.closed
    }
}
