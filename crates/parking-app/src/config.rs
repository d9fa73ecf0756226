//! Configuration management for parking-manager
//!
//! Config stored at: ~/.config/parking-manager/config.json

use parking_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Data file holding the vehicle list
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Login username
    #[serde(default = "default_username")]
    pub username: String,

    /// Login password
    #[serde(default = "default_password")]
    pub password: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Load the data file when a session starts
    #[serde(default = "default_true")]
    pub autoload: bool,

    /// Offer to save unsaved changes on exit
    #[serde(default = "default_true")]
    pub confirm_save_on_exit: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("vehicles.txt")
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "1234".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            username: default_username(),
            password: default_password(),
            output_format: OutputFormat::default(),
            autoload: true,
            confirm_save_on_exit: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("parking-manager");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parking Manager Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        writeln!(f, "Data file:      {}", self.data_file.display())?;
        writeln!(f, "Username:       {}", self.username)?;
        writeln!(f, "Password:       {}", "*".repeat(self.password.chars().count()))?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Autoload:       {}", self.autoload)?;
        writeln!(f, "Confirm save:   {}", self.confirm_save_on_exit)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("vehicles.txt"));
        assert_eq!(config.username, "admin");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.autoload);
        assert!(config.confirm_save_on_exit);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_file": "lot-b.txt", "output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("lot-b.txt"));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.password, "1234");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            username: "attendant".to_string(),
            autoload: false,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            parking_types::Error::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_display_masks_password() {
        let text = Config::default().to_string();
        assert!(text.contains("Password:       ****"));
        assert!(!text.contains("1234"));
    }
}
