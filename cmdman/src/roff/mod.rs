//! Roff man page output.
//!
//! Escaping helpers, the template renderer that binds them, and the file
//! writer for finished pages.

pub mod escape;
mod render;
mod types;
mod writer;

pub use render::{ManRenderer, TEMPLATE_NAME, TemplateSource};
pub use types::ManOutput;
pub use writer::write_man_page;
