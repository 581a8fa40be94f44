//! Email body templates
//!
//! Templates are plain text files with `{field}` placeholders resolved
//! against a contact row.

pub mod loader;
pub mod renderer;

pub use loader::TemplateSource;
pub use renderer::render;
