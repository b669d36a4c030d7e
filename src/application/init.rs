//! Initialize content root use case

use crate::error::Result;
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new content root at the specified path.
pub fn init(path: &Path, site: &str) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .newshead and content directories
    repo.initialize()?;

    // Create and save default config
    let config = Config::new(site.to_string());
    repo.save_config(&config)?;

    println!("Initialized newshead content root at {}", path.display());
    println!("Site: {}", site);

    Ok(())
}
