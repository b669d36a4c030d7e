//! File system content repository
//!
//! Posts live as markdown files under `content/<slug>.md`, each with a
//! leading TOML front-matter block fenced by `+++` lines. The `[meta]`
//! table of the front matter feeds the post metadata store.

use crate::domain::meta::{is_empty_value, InMemoryMetaStore, MetaStore, META_ROBOTS_INDEX};
use crate::domain::presentation::{ObjectType, PostRecord};
use crate::error::{NewsheadError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Regex for the leading `+++ ... +++` front-matter block
fn front_matter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)\A\+\+\+\s*\n(.*?)\n\+\+\+\s*\n?").unwrap())
}

/// Raw front-matter fields as written in the file
#[derive(Debug, Deserialize)]
struct FrontMatter {
    id: u64,
    title: Option<String>,
    #[serde(rename = "type", default)]
    object_type: ObjectType,
    date: Option<NaiveDate>,
    #[serde(default)]
    meta: BTreeMap<String, String>,
}

/// A fully parsed post: typed record, object type, and its metadata
#[derive(Debug)]
pub struct ParsedPost {
    pub object_type: ObjectType,
    pub record: PostRecord,
    pub meta: InMemoryMetaStore,
}

/// Summary of a post for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    pub slug: String,
    pub id: u64,
    pub date: Option<NaiveDate>,
    /// Whether the robots-index meta flag marks this post for noindex
    pub noindex: bool,
}

/// Parse a post file's content into record + metadata
pub fn parse_post(slug: &str, content: &str) -> Result<ParsedPost> {
    let captures = front_matter_regex().captures(content).ok_or_else(|| {
        NewsheadError::FrontMatter {
            file: format!("content/{}.md", slug),
            message: "missing '+++' front-matter block".to_string(),
        }
    })?;

    let front: FrontMatter =
        toml::from_str(&captures[1]).map_err(|e| NewsheadError::FrontMatter {
            file: format!("content/{}.md", slug),
            message: e.to_string(),
        })?;

    let body = &content[captures[0].len()..];
    let title = front
        .title
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| slug.to_string());

    let record = PostRecord::new(front.id, slug.to_string(), title, front.date);

    let mut meta = InMemoryMetaStore::new();
    for (key, value) in front.meta {
        meta.insert(&key, record.id, value);
    }

    Ok(ParsedPost {
        object_type: front.object_type,
        record,
        meta,
    })
}

/// Extract the text of the first markdown heading, if any
fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in MdParser::new(body) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }

    None
}

/// Abstract repository for content operations
pub trait ContentRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .newshead/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .newshead/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .newshead directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .newshead and content directory structure
    fn initialize(&self) -> Result<()>;

    /// Load and parse one post by slug
    fn load_post(&self, slug: &str) -> Result<ParsedPost>;

    /// List all posts under content/
    fn list_posts(&self) -> Result<Vec<PostEntry>>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the content root by walking up from the current directory.
    /// First checks the NEWSHEAD_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check NEWSHEAD_ROOT environment variable first
        if let Ok(root_path) = std::env::var("NEWSHEAD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_newshead_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(NewsheadError::Config(format!(
                    "NEWSHEAD_ROOT is set to '{}' but no .newshead directory found. \
                    Run 'newshead init' in that directory or unset NEWSHEAD_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the content root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_newshead_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .newshead
                    return Err(NewsheadError::NotContentDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .newshead directory
    fn has_newshead_dir(path: &Path) -> bool {
        path.join(".newshead").is_dir()
    }

    fn content_dir(&self) -> PathBuf {
        self.root.join("content")
    }

    fn post_path(&self, slug: &str) -> PathBuf {
        self.content_dir().join(format!("{}.md", slug))
    }

    /// Write a post file under content/
    pub fn write_post(&self, slug: &str, content: &str) -> Result<()> {
        let dir = self.content_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        fs::write(self.post_path(slug), content)?;
        Ok(())
    }
}

impl ContentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_newshead_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(NewsheadError::Config(format!(
                "Already a newshead directory: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(".newshead"))?;
        fs::create_dir_all(self.content_dir())?;

        Ok(())
    }

    fn load_post(&self, slug: &str) -> Result<ParsedPost> {
        let path = self.post_path(slug);

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NewsheadError::PostNotFound(slug.to_string())
            } else {
                NewsheadError::Io(e)
            }
        })?;

        parse_post(slug, &content)
    }

    fn list_posts(&self) -> Result<Vec<PostEntry>> {
        let dir = self.content_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().to_string();
            let Some(slug) = file_name.strip_suffix(".md") else {
                continue;
            };

            let parsed = self.load_post(slug)?;
            let robots = parsed.meta.get_value(META_ROBOTS_INDEX, parsed.record.id);

            entries.push(PostEntry {
                slug: slug.to_string(),
                id: parsed.record.id,
                date: parsed.record.date,
                noindex: !is_empty_value(robots.as_deref()),
            });
        }

        // Newest first, slug as tiebreaker; undated posts last
        entries.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.slug.cmp(&b.slug),
        });

        Ok(entries)
    }
}
