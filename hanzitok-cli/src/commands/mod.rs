//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Args, Parser};
use hanzitok_core::StoryMetadata;
use std::path::PathBuf;

pub mod hanzi;
pub mod tokenize;

/// Chinese story tokenizer using dictionary longest-match segmentation
#[derive(Debug, Parser)]
#[command(name = "hanzitok", version, long_about = None)]
pub struct Cli {
    /// Operating mode
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Path to the dictionary JSON file
    #[arg(value_name = "DICT")]
    pub dict: PathBuf,

    /// Path to the story text file (required for --token)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Comma-separated character names matched before the dictionary (e.g. 王小明,李华)
    #[arg(long, value_name = "LIST", default_value = "")]
    pub names: String,

    /// Output file, `-` for stdout (default: output.json or output.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Word id attached to character-name tokens (default: null)
    #[arg(long, value_name = "ID")]
    pub priority_id: Option<String>,

    /// Longest dictionary word tried at each position, in characters
    #[arg(long, value_name = "N")]
    pub max_window: Option<usize>,

    /// Write single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Story metadata written into the output envelope
    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Suppress log and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Exactly one mode flag must be given
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Extract comma-separated hanzi from the dictionary
    #[arg(long)]
    pub hanzi: bool,

    /// Tokenize a story using longest-match segmentation
    #[arg(long)]
    pub token: bool,
}

/// Metadata overrides for the output envelope
#[derive(Debug, Args, Default)]
pub struct MetadataArgs {
    /// Story identifier
    #[arg(long, value_name = "ID")]
    pub story_id: Option<String>,

    /// Story title
    #[arg(long)]
    pub title: Option<String>,

    /// Story subtitle
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Difficulty level
    #[arg(long, value_name = "LEVEL")]
    pub difficulty: Option<u32>,

    /// Story topic
    #[arg(long)]
    pub topic: Option<String>,
}

impl MetadataArgs {
    /// Merge flags over configured metadata
    pub fn resolve(&self, config: &CliConfig) -> StoryMetadata {
        let mut metadata = StoryMetadata::from(&config.metadata);
        if let Some(story_id) = &self.story_id {
            metadata.story_id = story_id.clone();
        }
        if let Some(title) = &self.title {
            metadata.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            metadata.subtitle = subtitle.clone();
        }
        if let Some(difficulty) = self.difficulty {
            metadata.difficulty = difficulty;
        }
        if let Some(topic) = &self.topic {
            metadata.topic = topic.clone();
        }
        metadata
    }
}

impl Cli {
    /// Execute the selected mode
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.mode.hanzi {
            hanzi::run(self, &config)
        } else {
            tokenize::run(self, &config)
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .format_timestamp(None)
            .format_target(false)
            .try_init();
        }
    }

    /// Print a status line unless quiet
    fn status(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hanzitok").chain(args.iter().copied()))
    }

    #[test]
    fn test_token_mode_parse() {
        let cli = parse(&["--token", "dictionary.json", "story.txt", "--names", "王小明,李华"])
            .unwrap();
        assert!(cli.mode.token);
        assert!(!cli.mode.hanzi);
        assert_eq!(cli.dict, PathBuf::from("dictionary.json"));
        assert_eq!(cli.input, Some(PathBuf::from("story.txt")));
        assert_eq!(cli.names, "王小明,李华");
    }

    #[test]
    fn test_hanzi_mode_without_input() {
        let cli = parse(&["--hanzi", "dictionary.json"]).unwrap();
        assert!(cli.mode.hanzi);
        assert!(cli.input.is_none());
        assert_eq!(cli.names, "");
    }

    #[test]
    fn test_both_modes_conflict() {
        let err = parse(&["--hanzi", "--token", "dictionary.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_mode_required() {
        let err = parse(&["dictionary.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_dictionary_required() {
        assert!(parse(&["--token"]).is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = parse(&["--token", "d.json", "s.txt", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_metadata_flags_override_config() {
        let cli = parse(&[
            "--token",
            "d.json",
            "s.txt",
            "--title",
            "小猫钓鱼",
            "--difficulty",
            "3",
        ])
        .unwrap();
        let config =
            CliConfig::from_toml_str("[metadata]\ntitle = \"旧\"\ntopic = \"animals\"\n").unwrap();

        let metadata = cli.metadata.resolve(&config);
        assert_eq!(metadata.title, "小猫钓鱼");
        assert_eq!(metadata.difficulty, 3);
        assert_eq!(metadata.topic, "animals");
        assert_eq!(metadata.story_id, "");
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
