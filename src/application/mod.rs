//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_posts;
pub mod manage_config;
pub mod render_head;

pub use list_posts::list_posts;
pub use manage_config::ConfigService;
pub use render_head::RenderHeadService;
