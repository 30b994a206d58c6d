//! JSON output formatter

use anyhow::Result;
use hanzitok_core::StoryDocument;
use std::io::Write;

/// JSON formatter - writes a story document envelope
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Serialize the document and flush
    pub fn write_document(&mut self, document: &StoryDocument) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, document)?;
        } else {
            serde_json::to_writer(&mut self.writer, document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
