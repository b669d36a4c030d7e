//! Tag presenters - one component per head meta tag
//!
//! A presenter computes the raw value of a single tag from the shared
//! rendering context. An empty value suppresses the tag entirely.

pub mod googlebot_news;

pub use googlebot_news::GooglebotNewsPresenter;

use crate::domain::hooks::HookRegistry;
use crate::domain::meta::MetaStore;
use crate::domain::presentation::Presentation;

/// Everything a presenter may read during one render call
pub struct RenderContext<'a> {
    pub presentation: &'a Presentation,
    pub hooks: &'a HookRegistry,
    pub meta: &'a dyn MetaStore,
}

/// A presenter for one `<meta name=.. content=.. />` head tag
pub trait TagPresenter {
    /// The tag's `name` attribute
    fn key(&self) -> &'static str;

    /// Compute the raw tag value; empty suppresses the tag
    fn get(&self, ctx: &RenderContext) -> String;

    /// Render the full tag, or an empty string when the value is empty
    fn present(&self, ctx: &RenderContext) -> String {
        let value = self.get(ctx);
        if value.is_empty() {
            return String::new();
        }

        format!(
            r#"<meta name="{}" content="{}" />"#,
            self.key(),
            escape_attribute(&value)
        )
    }
}

/// Escape a value for use inside a double-quoted HTML attribute
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
