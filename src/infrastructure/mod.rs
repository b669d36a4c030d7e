//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod content;

pub use config::Config;
pub use content::{ContentRepository, FileSystemRepository, PostEntry};
