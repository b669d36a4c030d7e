//! Presentation model - the typed rendering context presenters read from

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content object types a presentation can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// A regular post (the only type news presenters apply to)
    #[default]
    Post,
    /// A static page
    Page,
    /// A taxonomy term archive
    Term,
    /// The site front page
    Home,
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" => Ok(ObjectType::Post),
            "page" => Ok(ObjectType::Page),
            "term" => Ok(ObjectType::Term),
            "home" => Ok(ObjectType::Home),
            _ => Err(format!(
                "Invalid object type: '{}'. Valid object types are: post, page, term, home",
                s
            )),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::Post => "post",
            ObjectType::Page => "page",
            ObjectType::Term => "term",
            ObjectType::Home => "home",
        };
        write!(f, "{}", name)
    }
}

/// A post-like content record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub date: Option<NaiveDate>,
}

impl PostRecord {
    pub fn new(id: u64, slug: String, title: String, date: Option<NaiveDate>) -> Self {
        PostRecord {
            id,
            slug,
            title,
            date,
        }
    }
}

/// Rendering context for one head-render call
///
/// Built by the render pipeline, borrowed read-only by presenters.
/// Holds no state between invocations.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub object_type: ObjectType,
    pub source: PostRecord,
}

impl Presentation {
    pub fn new(object_type: ObjectType, source: PostRecord) -> Self {
        Presentation {
            object_type,
            source,
        }
    }
}
