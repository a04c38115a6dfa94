use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fetch::{FetchOptions, DEFAULT_READ_BUFFER_BYTES};

/// URL used when none is given on the command line.
pub const DEFAULT_URL: &str = "https://example.org";

/// Fetch parameters (optional `[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Size in bytes of each receive buffer.
    pub read_buffer_bytes: usize,
    /// Connect to this port instead of the scheme default (e.g. a local dev server).
    #[serde(default)]
    pub port_override: Option<u16>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: DEFAULT_READ_BUFFER_BYTES,
            port_override: None,
        }
    }
}

/// Global configuration loaded from `~/.config/tinyget/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TinygetConfig {
    /// URL to use when the CLI is run without one.
    pub default_url: String,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for TinygetConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl TinygetConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            read_buffer_bytes: self.fetch.read_buffer_bytes,
            port_override: self.fetch.port_override,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tinyget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TinygetConfig> {
    load_or_init_at(config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: PathBuf) -> Result<TinygetConfig> {
    if !path.exists() {
        let default_cfg = TinygetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TinygetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
