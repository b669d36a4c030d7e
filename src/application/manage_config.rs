//! Config management use case

use crate::error::{NewsheadError, Result};
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};

/// Service for managing content root configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "site" => Ok(config.site.clone()),
            "suppress_noindex" => Ok(config.suppress_noindex.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NewsheadError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: site, suppress_noindex, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "site" => {
                config.site = value.to_string();
            }
            "suppress_noindex" => {
                config.suppress_noindex = value.parse().map_err(|_| {
                    NewsheadError::Config(format!(
                        "Invalid value for suppress_noindex: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(NewsheadError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NewsheadError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: site, suppress_noindex",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new("https://news.example".to_string()))
            .unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_site() {
        let (_temp, service) = setup();
        assert_eq!(service.get("site").unwrap(), "https://news.example");
    }

    #[test]
    fn test_set_suppress_noindex() {
        let (_temp, service) = setup();
        service.set("suppress_noindex", "true").unwrap();
        assert_eq!(service.get("suppress_noindex").unwrap(), "true");
    }

    #[test]
    fn test_set_suppress_noindex_invalid() {
        let (_temp, service) = setup();
        let err = service.set("suppress_noindex", "maybe").unwrap_err();
        assert!(err.to_string().contains("true or false"));
    }

    #[test]
    fn test_set_created_read_only() {
        let (_temp, service) = setup();
        assert!(service.set("created", "now").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = setup();
        assert!(service.get("nope").is_err());
        assert!(service.set("nope", "x").is_err());
    }
}
