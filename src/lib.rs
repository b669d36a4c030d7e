//! newshead - Head meta-tag renderer for news content
//!
//! Renders search-engine head tags for the posts of a markdown content
//! directory. The core is the Googlebot-News presenter, which decides per
//! post whether to emit a `noindex` meta tag, driven by a filter-hook chain
//! and a post-metadata lookup.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NewsheadError;
