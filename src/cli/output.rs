//! Output formatting utilities

use crate::infrastructure::{Config, PostEntry};

/// Format a list of post entries for display
pub fn format_post_list(posts: &[PostEntry]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for entry in posts {
        let date = match entry.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "          ".to_string(),
        };
        let flag = if entry.noindex { "noindex" } else { "" };
        output.push_str(&format!("{}  #{:<4} {}  {}\n", date, entry.id, entry.slug, flag));
    }
    output
}

/// Format the full configuration for display
pub fn format_config(config: &Config) -> String {
    format!(
        "site = {}\nsuppress_noindex = {}\ncreated = {}\n",
        config.site,
        config.suppress_noindex,
        config.created.to_rfc3339()
    )
}
