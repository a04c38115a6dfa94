//! CLI tests, split by topic.

use super::Cli;
use clap::Parser;
use tinyget_core::config::TinygetConfig;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// Runs with default config and returns everything written to the output.
pub(super) fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut out = Vec::new();
    cli.run(&TinygetConfig::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}
