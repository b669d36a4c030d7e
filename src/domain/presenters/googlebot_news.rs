//! Googlebot-News tag presenter
//!
//! Emits `noindex` for posts excluded from Google News indexing.
//! See <https://support.google.com/news/publisher/answer/93977>

use crate::domain::hooks::{
    ACTION_NEWS_HEAD, FILTER_HEAD_DISPLAY_NOINDEX, FILTER_HEAD_DISPLAY_NOINDEX_LEGACY,
};
use crate::domain::meta::{is_empty_value, META_ROBOTS_INDEX};
use crate::domain::presentation::{ObjectType, PostRecord};
use crate::domain::presenters::{RenderContext, TagPresenter};

/// Presenter for the `Googlebot-News` meta tag
#[derive(Debug, Default)]
pub struct GooglebotNewsPresenter;

impl GooglebotNewsPresenter {
    pub fn new() -> Self {
        GooglebotNewsPresenter
    }

    /// Decide whether the noindex tag should be rendered for this post
    ///
    /// Seeds the decision with `true`, lets the legacy then the current
    /// filter override it, and only then consults the robots-index meta
    /// value. Anything falsy along the way means "do not noindex".
    fn display_noindex(&self, ctx: &RenderContext, post: &PostRecord) -> bool {
        let display_noindex = ctx.hooks.apply_filters_deprecated(
            FILTER_HEAD_DISPLAY_NOINDEX_LEGACY,
            true,
            post,
            FILTER_HEAD_DISPLAY_NOINDEX,
        );

        let display_noindex =
            ctx.hooks
                .apply_filters(FILTER_HEAD_DISPLAY_NOINDEX, display_noindex, post);

        if !display_noindex {
            return false;
        }

        let robots_index = ctx.meta.get_value(META_ROBOTS_INDEX, post.id);

        !is_empty_value(robots_index.as_deref())
    }
}

impl TagPresenter for GooglebotNewsPresenter {
    fn key(&self) -> &'static str {
        "Googlebot-News"
    }

    fn get(&self, ctx: &RenderContext) -> String {
        if ctx.presentation.object_type != ObjectType::Post {
            return String::new();
        }

        // Allow for running additional code before adding the News head tags.
        ctx.hooks.do_action(ACTION_NEWS_HEAD);

        if self.display_noindex(ctx, &ctx.presentation.source) {
            return "noindex".to_string();
        }

        String::new()
    }
}
