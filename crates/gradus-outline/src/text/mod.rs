//! The comment-formatted outline text format.
//!
//! - [`parser`]: Text → [`Curriculum`](crate::Curriculum)
//! - [`writer`]: [`Curriculum`](crate::Curriculum) → canonical text
//! - [`helpers`]: Line matchers shared with the Markdown reader

pub mod helpers;
pub mod parser;
pub mod writer;

pub use parser::parse_outline;
pub use writer::write_outline;
