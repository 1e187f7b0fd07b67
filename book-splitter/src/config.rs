//! book-split configuration management.

use crate::text::DEFAULT_CHUNK_SIZE;
use crate::validate::DEFAULT_MINIMUM_WORDS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Conventional store directory, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = "textos";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Words per unit when splitting
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Minimum words a unit must hold to pass validation
    #[serde(default = "default_minimum_words")]
    pub minimum_words: usize,

    /// Directory holding the numbered units
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_minimum_words() -> usize {
    DEFAULT_MINIMUM_WORDS
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_DIR)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            minimum_words: default_minimum_words(),
            store_dir: default_store_dir(),
        }
    }
}

impl AppConfig {
    /// Get the config file path: ~/.config/cli-programs/book-splitter.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home
            .join(".config")
            .join("cli-programs")
            .join("book-splitter.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.minimum_words, 1000);
        assert_eq!(config.store_dir, PathBuf::from("textos"));
    }

    #[test]
    fn test_config_path() {
        if let Ok(path) = AppConfig::config_path() {
            assert!(path.ends_with("cli-programs/book-splitter.toml"));
        }
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
chunk_size = 500
minimum_words = 450
store_dir = "/data/livro"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.minimum_words, 450);
        assert_eq!(config.store_dir, PathBuf::from("/data/livro"));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str("chunk_size = 250").unwrap();
        assert_eq!(config.chunk_size, 250);
        assert_eq!(config.minimum_words, 1000);
        assert_eq!(config.store_dir, PathBuf::from("textos"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = AppConfig {
            chunk_size: 750,
            minimum_words: 700,
            store_dir: PathBuf::from("out"),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(toml::from_str::<AppConfig>(&text).unwrap(), config);
    }
}
