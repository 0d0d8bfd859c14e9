use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::DEFAULT_PROFILE_KEY;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the key-value store
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Key the profile is stored under
    #[serde(default = "default_profile_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_profile_key(),
        }
    }
}

fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".healthquiz")
}

fn default_storage_path() -> PathBuf {
    base_dir().join("storage.json")
}

fn default_profile_key() -> String {
    DEFAULT_PROFILE_KEY.to_string()
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a file, creating a default one if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".healthquiz").join("config.toml"))
    }

    /// Point the store at a different file
    pub fn set_storage_path(&mut self, path: PathBuf) {
        self.storage.path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage.key, "healthQuizProfile");
        assert!(config.storage.path.ends_with("storage.json"));
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cfg").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.storage.key, DEFAULT_PROFILE_KEY);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[storage]\nkey = \"quiz\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.storage.key, "quiz");
        assert!(config.storage.path.ends_with("storage.json"));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_storage_path(PathBuf::from("/tmp/quiz.json"));

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("/tmp/quiz.json"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.storage.path, PathBuf::from("/tmp/quiz.json"));
    }
}
