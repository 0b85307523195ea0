//! Filename templating.
//!
//! A template is a user-editable string with placeholder tokens
//! (`{date}`, `{counter}`, ...) expanded at file-creation time.
mod context;
mod template;

pub use context::TemplateContext;
pub use template::{expand, sanitize, FALLBACK_NAME};
