//! Post metadata store

use std::collections::HashMap;

/// Meta key holding the Google News robots-index flag for a post
pub const META_ROBOTS_INDEX: &str = "newssitemap-robots-index";

/// Key-value store of post metadata, read by `(meta_key, post_id)`
pub trait MetaStore {
    /// Look up a scalar metadata value
    fn get_value(&self, meta_key: &str, post_id: u64) -> Option<String>;
}

/// Decide whether a stored metadata value counts as empty
///
/// The stored flag uses `"0"` for indexable posts, so `"0"` counts as
/// empty alongside a missing or blank value.
pub fn is_empty_value(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some("0"))
}

/// In-memory metadata store, populated from post front matter
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetaStore {
    values: HashMap<(String, u64), String>,
}

impl InMemoryMetaStore {
    pub fn new() -> Self {
        InMemoryMetaStore::default()
    }

    /// Insert a metadata value for a post
    pub fn insert(&mut self, meta_key: &str, post_id: u64, value: String) {
        self.values.insert((meta_key.to_string(), post_id), value);
    }
}

impl MetaStore for InMemoryMetaStore {
    fn get_value(&self, meta_key: &str, post_id: u64) -> Option<String> {
        self.values
            .get(&(meta_key.to_string(), post_id))
            .cloned()
    }
}
