//! Token mode: segment a story and write the JSON envelope

use super::Cli;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_writer, is_stdout, JsonFormatter};
use anyhow::Result;
use hanzitok_core::{PrioritySet, PunctuationTable, Segmenter, StoryDocument};

/// Execute token mode
pub fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let input = cli.input.as_deref().ok_or_else(|| CliError::MissingInput {
        dict: cli.dict.display().to_string(),
    })?;

    let source = FileReader::read_dictionary(&cli.dict)?;
    let story = FileReader::read_story(input)?;

    let priority = PrioritySet::parse(&cli.names);
    if !priority.is_empty() {
        log::debug!("{} character names registered", priority.len());
    }

    let max_window = cli.max_window.unwrap_or(config.segmentation.max_window);
    let priority_id = cli
        .priority_id
        .clone()
        .or_else(|| config.segmentation.priority_match_id.clone());

    let segmenter = Segmenter::builder()
        .vocabulary(source.to_vocabulary())
        .priority_names(priority)
        .classifier(PunctuationTable::with_extra(config.punctuation.extra.chars()))
        .max_window(max_window)
        .priority_match_id(priority_id)
        .build()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    let unreachable = segmenter.vocabulary().unreachable_forms(max_window);
    if !unreachable.is_empty() {
        log::warn!(
            "{} dictionary entries are longer than {} characters and will never match: {}",
            unreachable.len(),
            max_window,
            unreachable.join(", ")
        );
    }
    for id in source.empty_entries() {
        log::warn!("Dictionary entry '{id}' has an empty hanzi field and will never match");
    }
    let long_names = segmenter.priority().longer_than(max_window);
    if !long_names.is_empty() {
        log::warn!(
            "{} character names are longer than {} characters and will never match: {}",
            long_names.len(),
            max_window,
            long_names.join(", ")
        );
    }

    let result = segmenter.segment(&story);
    let stats = result.stats;
    log::debug!(
        "{} chars: {} dictionary words, {} names, {} punctuation, {} unknown",
        stats.chars,
        stats.vocabulary_matches,
        stats.priority_matches,
        stats.punctuation,
        stats.unknown
    );

    let document = StoryDocument::new(result.tokens).with_metadata(cli.metadata.resolve(config));

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.token_output.clone());
    let pretty = config.output.pretty_json && !cli.compact;
    JsonFormatter::new(create_writer(&output)?, pretty).write_document(&document)?;

    if !is_stdout(&output) {
        cli.status(&format!("[OK] Wrote tokenized story → {}", output.display()));
    }

    Ok(())
}
