//! hanzitok command-line entry point

use clap::Parser;
use hanzitok_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
