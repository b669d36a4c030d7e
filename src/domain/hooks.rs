//! Hook registry - named filter chains and notification actions
//!
//! Filters are ordered lists of `fn(bool, &PostRecord) -> bool` callbacks
//! threaded in registration order. Actions are side-effect-only hooks whose
//! return values are ignored. The host owns all registration.

use crate::domain::presentation::PostRecord;
use std::collections::HashMap;
use tracing::warn;

/// Action fired before the News head tags are rendered
pub const ACTION_NEWS_HEAD: &str = "news/head";

/// Filter deciding whether the noindex tag may be output
pub const FILTER_HEAD_DISPLAY_NOINDEX: &str = "news/head_display_noindex";

/// Deprecated alias of [`FILTER_HEAD_DISPLAY_NOINDEX`], still active
/// during the migration window
pub const FILTER_HEAD_DISPLAY_NOINDEX_LEGACY: &str = "news_head_display_noindex";

type FilterFn = Box<dyn Fn(bool, &PostRecord) -> bool>;
type ActionFn = Box<dyn Fn()>;

/// Registry of named filter chains and action hooks
#[derive(Default)]
pub struct HookRegistry {
    filters: HashMap<String, Vec<FilterFn>>,
    actions: HashMap<String, Vec<ActionFn>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        HookRegistry::default()
    }

    /// Register a filter callback; invocation order is registration order
    pub fn add_filter<F>(&mut self, name: &str, f: F)
    where
        F: Fn(bool, &PostRecord) -> bool + 'static,
    {
        self.filters
            .entry(name.to_string())
            .or_default()
            .push(Box::new(f));
    }

    /// Thread `seed` through every filter registered under `name`
    ///
    /// With no registered callbacks the seed is returned unchanged.
    pub fn apply_filters(&self, name: &str, seed: bool, post: &PostRecord) -> bool {
        match self.filters.get(name) {
            Some(chain) => chain.iter().fold(seed, |value, f| f(value, post)),
            None => seed,
        }
    }

    /// Thread `seed` through a deprecated filter name
    ///
    /// Behaves exactly like [`apply_filters`](Self::apply_filters), but warns
    /// when callbacks are still registered under the old name so adopters can
    /// move to `replacement`.
    pub fn apply_filters_deprecated(
        &self,
        old_name: &str,
        seed: bool,
        post: &PostRecord,
        replacement: &str,
    ) -> bool {
        if self.has_filter(old_name) {
            warn!(
                hook = old_name,
                replacement, "filter hook is deprecated, use its replacement"
            );
        }
        self.apply_filters(old_name, seed, post)
    }

    /// Check whether any callback is registered under `name`
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.get(name).is_some_and(|c| !c.is_empty())
    }

    /// Register an action callback
    pub fn add_action<F>(&mut self, name: &str, f: F)
    where
        F: Fn() + 'static,
    {
        self.actions
            .entry(name.to_string())
            .or_default()
            .push(Box::new(f));
    }

    /// Run every action registered under `name`; unknown names are a no-op
    pub fn do_action(&self, name: &str) {
        if let Some(chain) = self.actions.get(name) {
            for f in chain {
                f();
            }
        }
    }
}
