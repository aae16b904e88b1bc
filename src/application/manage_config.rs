//! Config management use case

use crate::domain::TimestampDefaults;
use crate::error::{DaylogError, Result};
use crate::infrastructure::{Config, OutputFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for reading and writing the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.path)?;

        match key {
            "output" => Ok(format!("{:?}", config.output).to_lowercase()),
            "timestamps" => Ok(format!("{:?}", config.timestamps).to_lowercase()),
            _ => Err(DaylogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: output, timestamps",
                key
            ))),
        }
    }

    /// Set a config value, writing the file if it does not exist yet
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;

        match key {
            "output" => {
                config.output = OutputFormat::from_str(value).map_err(DaylogError::Config)?;
            }
            "timestamps" => {
                config.timestamps =
                    TimestampDefaults::from_str(value).map_err(DaylogError::Config)?;
            }
            _ => {
                return Err(DaylogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: output, timestamps",
                    key
                )));
            }
        }

        config.save(&self.path)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("daylog.toml"));
        assert_eq!(service.get("output").unwrap(), "pretty");
        assert_eq!(service.get("timestamps").unwrap(), "shared");
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daylog.toml");
        let service = ConfigService::new(path.clone());

        service.set("output", "compact").unwrap();
        service.set("timestamps", "Independent").unwrap();

        assert!(path.exists());
        assert_eq!(service.get("output").unwrap(), "compact");
        assert_eq!(service.get("timestamps").unwrap(), "independent");
        assert_eq!(service.list().unwrap().output, OutputFormat::Compact);
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("daylog.toml"));

        let err = service.get("editor").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'editor'"));
        assert!(service.set("editor", "vim").is_err());
    }

    #[test]
    fn test_invalid_value_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("daylog.toml");
        let service = ConfigService::new(path.clone());

        let err = service.set("timestamps", "sometimes").unwrap_err();
        assert!(err.to_string().contains("Invalid timestamps policy"));
        assert!(!path.exists());
    }
}
