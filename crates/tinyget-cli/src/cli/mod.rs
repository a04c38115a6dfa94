//! CLI for tinyget: parse a URL, print its parts, optionally load it.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tinyget_core::config::{self, TinygetConfig};
use tinyget_core::fetch::TcpConnector;
use tinyget_core::loader;
use tinyget_core::response::RawResponse;
use tinyget_core::url_model;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tinyget")]
#[command(about = "Parse a URL and fetch it with a plain HTTP/1.0 GET", long_about = None)]
pub struct Cli {
    /// URL to parse and fetch (defaults to `default_url` from config, https://example.org).
    pub url: Option<String>,

    /// Only print the parsed components; do not fetch.
    #[arg(long)]
    pub parse_only: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.run(&cfg, &mut out)
    }

    /// Parses the URL, prints `scheme = .., host = .., path = ..` and, unless
    /// `--parse-only`, writes the loaded bytes after it.
    pub fn run<W: Write>(&self, cfg: &TinygetConfig, out: &mut W) -> Result<()> {
        let input = self.url.as_deref().unwrap_or(&cfg.default_url);
        let url = url_model::parse(input).with_context(|| format!("invalid URL: {input}"))?;
        writeln!(out, "{}", url)?;

        if self.parse_only {
            return Ok(());
        }
        if !loader::has_loader(url.scheme()) {
            tracing::info!("not fetching {}: no loader for scheme `{}`", input, url.scheme());
            return Ok(());
        }

        let bytes = loader::load(&url, &TcpConnector, &cfg.fetch_options())
            .with_context(|| format!("load {input}"))?;
        if url.scheme().is_plaintext_network() {
            tracing::info!("{} answered: {}", url.host(), RawResponse::new(&bytes).status_line());
        }
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
