//! Plain text output formatter

use anyhow::Result;
use std::io::Write;

/// Hanzi list formatter - writes surface forms separated by `, `
pub struct HanziListFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> HanziListFormatter<W> {
    /// Create a new hanzi list formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Append one surface form
    pub fn push(&mut self, hanzi: &str) -> Result<()> {
        if self.written > 0 {
            write!(self.writer, ", ")?;
        }
        write!(self.writer, "{hanzi}")?;
        self.written += 1;
        Ok(())
    }

    /// Number of forms written so far
    pub fn count(&self) -> usize {
        self.written
    }

    /// Flush the writer
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
