//! List posts use case

use crate::error::Result;
use crate::infrastructure::{ContentRepository, FileSystemRepository, PostEntry};

/// List all posts in the content directory, newest first.
pub fn list_posts(repository: &FileSystemRepository) -> Result<Vec<PostEntry>> {
    repository.list_posts()
}
