//! Markdown rendering and reading.
//!
//! - [`renderer`]: [`Curriculum`](crate::Curriculum) → Markdown
//! - [`reader`]: Markdown → [`Curriculum`](crate::Curriculum) via `pulldown-cmark`
//!
//! The two are inverses for well-formed curricula, the same as the outline
//! text format.

pub mod reader;
pub mod renderer;

pub use reader::parse_markdown;
pub use renderer::{escape_block, escape_inline, render_markdown};
