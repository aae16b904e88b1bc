//! Configuration management

use crate::domain::TimestampDefaults;
use crate::error::{DaylogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File used when neither `--config` nor `DAYLOG_CONFIG` is given
pub const DEFAULT_CONFIG_FILE: &str = "daylog.toml";

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "DAYLOG_CONFIG";

/// How entries are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Pretty,
    /// One line of JSON per record
    Compact,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "compact" => Ok(OutputFormat::Compact),
            _ => Err(format!(
                "Invalid output format: '{}'. Valid formats are: pretty, compact",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default)]
    pub timestamps: TimestampDefaults,
}

impl Config {
    /// Pick the config file: explicit path, then `DAYLOG_CONFIG`, then
    /// `daylog.toml` in the current directory
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load config from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(DaylogError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            DaylogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        log::debug!("wrote config to {}", path.display());

        Ok(())
    }
}
