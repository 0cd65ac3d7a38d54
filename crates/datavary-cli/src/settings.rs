use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "datavary.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the randomized built-in pools.
    pub seed: u64,
    /// Registry file layered over the built-in types.
    pub registry: Option<PathBuf>,
    pub strict: bool,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            registry: None,
            strict: false,
            format: OutputFormat::Json,
        }
    }
}

/// Load settings from `path`, or from `datavary.toml` when it exists.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, CliError> {
    Ok(toml::from_str(content)?)
}
