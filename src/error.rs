//! Error types for newshead

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the newshead application
#[derive(Debug, Error)]
pub enum NewsheadError {
    #[error("Not a newshead directory: {0}")]
    NotContentDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Front matter error in {file}: {message}")]
    FrontMatter { file: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NewsheadError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NewsheadError::NotContentDirectory(_) => 2,
            NewsheadError::PostNotFound(_) => 3,
            NewsheadError::FrontMatter { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NewsheadError::NotContentDirectory(path) => {
                format!(
                    "Not a newshead directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'newshead init' in this directory to create a content root\n\
                    • Navigate to an existing newshead directory\n\
                    • Set NEWSHEAD_ROOT environment variable to your content path",
                    path.display()
                )
            }
            NewsheadError::PostNotFound(slug) => {
                format!(
                    "Post not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'newshead list' to see available posts\n\
                    • Posts live under content/<slug>.md\n\
                    • Slugs are the filename without the .md extension",
                    slug
                )
            }
            NewsheadError::FrontMatter { file, message } => {
                format!(
                    "Front matter error in {}: {}\n\n\
                    Expected a leading TOML block fenced by '+++' lines, e.g.:\n\
                    +++\n\
                    id = 1\n\
                    title = \"A headline\"\n\
                    date = \"2025-01-17\"\n\
                    +++",
                    file, message
                )
            }
            NewsheadError::Config(msg) => {
                if msg.contains("Invalid object type") {
                    format!(
                        "{}\n\n\
                        Valid object types: post, page, term, home",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NewsheadError
pub type Result<T> = std::result::Result<T, NewsheadError>;
