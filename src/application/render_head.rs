//! Render head use case

use crate::domain::hooks::FILTER_HEAD_DISPLAY_NOINDEX;
use crate::domain::presenters::GooglebotNewsPresenter;
use crate::domain::{HookRegistry, Presentation, RenderContext, TagPresenter};
use crate::error::Result;
use crate::infrastructure::{ContentRepository, FileSystemRepository};
use tracing::debug;

/// Service for rendering the head fragment of a post
pub struct RenderHeadService {
    repository: FileSystemRepository,
}

impl RenderHeadService {
    /// Create a new render head service
    pub fn new(repository: FileSystemRepository) -> Self {
        RenderHeadService { repository }
    }

    /// The presenters run on every render, in output order
    fn presenters() -> Vec<Box<dyn TagPresenter>> {
        vec![Box::new(GooglebotNewsPresenter::new())]
    }

    /// Render the head fragment for a post, with hooks built from config
    pub fn execute(&self, slug: &str) -> Result<String> {
        // 1. Load config to pick up host-level hook registrations
        let config = self.repository.load_config()?;

        let mut hooks = HookRegistry::new();
        if config.suppress_noindex {
            // Host-level veto: the config switch wins over post metadata
            hooks.add_filter(FILTER_HEAD_DISPLAY_NOINDEX, |_, _| false);
        }

        self.execute_with_hooks(slug, &hooks)
    }

    /// Render the head fragment for a post against a caller-built registry
    pub fn execute_with_hooks(&self, slug: &str, hooks: &HookRegistry) -> Result<String> {
        // 2. Load and parse the post
        let parsed = self.repository.load_post(slug)?;

        debug!(slug, id = parsed.record.id, "rendering head fragment");

        // 3. Build the presentation and run every presenter
        let presentation = Presentation::new(parsed.object_type, parsed.record);
        let ctx = RenderContext {
            presentation: &presentation,
            hooks,
            meta: &parsed.meta,
        };

        let lines: Vec<String> = Self::presenters()
            .iter()
            .map(|p| p.present(&ctx))
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}
