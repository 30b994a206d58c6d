//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::HanziListFormatter;

/// Open the output destination; `-` means stdout
pub fn create_writer(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Whether the destination is stdout
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_writer_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        {
            let mut writer = create_writer(&path).unwrap();
            write!(writer, "我").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "我");
    }

    #[test]
    fn test_create_writer_bad_directory() {
        let Err(err) = create_writer(Path::new("/nonexistent/dir/out.json")) else {
            panic!("expected an error for a missing directory");
        };
        assert!(err.to_string().contains("Failed to create output file"));
    }

    #[test]
    fn test_is_stdout() {
        assert!(is_stdout(Path::new("-")));
        assert!(!is_stdout(Path::new("output.json")));
    }
}
