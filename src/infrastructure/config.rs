//! Configuration management

use crate::error::{NewsheadError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site base URL, informational only
    pub site: String,
    /// When true, a veto filter is registered on the current noindex hook
    #[serde(default)]
    pub suppress_noindex: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(site: String) -> Self {
        Config {
            site,
            suppress_noindex: false,
            created: Utc::now(),
        }
    }

    /// Load config from .newshead/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".newshead").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NewsheadError::NotContentDirectory(path.to_path_buf())
            } else {
                NewsheadError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NewsheadError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .newshead/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let newshead_dir = path.join(".newshead");
        let config_path = newshead_dir.join("config.toml");

        // Ensure .newshead directory exists
        if !newshead_dir.exists() {
            fs::create_dir(&newshead_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NewsheadError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new("https://example.org".to_string());
        assert_eq!(config.site, "https://example.org");
        assert!(!config.suppress_noindex);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new("https://news.example".to_string());
        config.suppress_noindex = true;

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .newshead directory was created
        assert!(temp.path().join(".newshead").exists());
        assert!(temp.path().join(".newshead/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.site, config.site);
        assert_eq!(loaded.suppress_noindex, config.suppress_noindex);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .newshead
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            NewsheadError::NotContentDirectory(_) => {}
            _ => panic!("Expected NotContentDirectory error"),
        }
    }

    #[test]
    fn test_suppress_noindex_defaults_false() {
        let temp = TempDir::new().unwrap();
        let config = Config::new("https://example.org".to_string());
        config.save_to_dir(temp.path()).unwrap();

        // Rewrite the file without the suppress_noindex key
        let config_path = temp.path().join(".newshead/config.toml");
        let contents = fs::read_to_string(&config_path).unwrap();
        let stripped: String = contents
            .lines()
            .filter(|l| !l.starts_with("suppress_noindex"))
            .map(|l| format!("{}\n", l))
            .collect();
        fs::write(&config_path, stripped).unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert!(!loaded.suppress_noindex);
    }
}
