//! Shell configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use super::FormatArg;

/// Resolved shell configuration: `[output]` defaults applied beneath
/// command-line flags.
#[derive(Debug, Default)]
pub struct ShellConfig {
    pub format: Option<FormatArg>,
    pub width: Option<i32>,
    pub wrap: Option<bool>,
}

impl ShellConfig {
    /// Loads the config file, preferring `explicit` over the per-user
    /// default location. A missing file yields defaults; a malformed one is
    /// an error.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(default_config_path);
        let raw = match path.as_ref() {
            Some(config_path) if config_path.exists() => read_file(config_path)?,
            _ => RawConfig::default(),
        };
        let format = match raw.output.format.as_deref() {
            Some(value) => {
                Some(
                    FormatArg::from_str(value, true).map_err(|_| ConfigError::InvalidFormat {
                        value: value.to_string(),
                    })?,
                )
            }
            None => None,
        };
        Ok(Self {
            format,
            width: raw.output.width,
            wrap: raw.output.wrap,
        })
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    format: Option<String>,
    width: Option<i32>,
    wrap: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read shell config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse shell config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("config output.format '{value}' is invalid")]
    InvalidFormat { value: String },
}

/// Default per-user config location.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("gloam").join("shell.toml"))
}
