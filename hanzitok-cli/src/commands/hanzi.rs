//! Hanzi mode: list every dictionary surface form

use super::Cli;
use crate::config::CliConfig;
use crate::input::FileReader;
use crate::output::{create_writer, is_stdout, HanziListFormatter};
use anyhow::Result;

/// Execute hanzi mode
pub fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    if let Some(input) = &cli.input {
        log::warn!("Ignoring {} in --hanzi mode", input.display());
    }

    let source = FileReader::read_dictionary(&cli.dict)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.hanzi_output.clone());
    let mut formatter = HanziListFormatter::new(create_writer(&output)?);
    for hanzi in source.surface_forms() {
        formatter.push(hanzi)?;
    }
    formatter.finish()?;
    log::debug!("Wrote {} surface forms", formatter.count());

    if !is_stdout(&output) {
        cli.status(&format!(
            "[OK] Wrote comma-separated hanzi list → {}",
            output.display()
        ));
    }

    Ok(())
}
