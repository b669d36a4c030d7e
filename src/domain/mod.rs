//! Domain layer - Presentation model, hooks, metadata, presenters

pub mod hooks;
pub mod meta;
pub mod presentation;
pub mod presenters;

pub use hooks::HookRegistry;
pub use meta::{InMemoryMetaStore, MetaStore};
pub use presentation::{ObjectType, PostRecord, Presentation};
pub use presenters::{RenderContext, TagPresenter};
