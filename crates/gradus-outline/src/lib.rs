//! Curriculum model, outline text format, Markdown, and validation.
//!
//! This crate owns the curriculum data and its textual forms. It has no
//! query logic; see `gradus-query` for lookups and flashcards.
//!
//! # Modules
//!
//! - [`model`]: `Curriculum`, `Level`, `Topic`, `ProblemReference`
//! - [`text`]: The comment-formatted outline format
//!   - [`text::parser`]: Line-oriented outline parser
//!   - [`text::writer`]: Canonical outline writer
//!   - [`text::helpers`]: Line classification shared by the readers
//! - [`markdown`]: Markdown rendering and reading
//! - [`validate`]: Structural checks over a parsed curriculum
//! - [`workbook`]: Exercise headings from practice workbooks
//! - [`loader`]: Async file loading
//! - [`builtin`]: The embedded array/list curriculum
//!
//! # Example
//!
//! ```rust
//! use gradus_outline::{parse_outline, validate, write_outline};
//!
//! let text = concat!(
//!     "#  Arrays\n",
//!     "#  LEVEL 1 — Foundations\n",
//!     "#  - Traversal & Sum\n",
//!     "#      LeetCode 1480: Running Sum of 1D Array\n",
//! );
//!
//! let curriculum = parse_outline(text).unwrap();
//! assert_eq!(curriculum.levels.len(), 1);
//! assert_eq!(curriculum.levels[0].topics[0].problems[0].id, 1480);
//!
//! // Re-parsing the written form gives back the same structure.
//! let again = parse_outline(&write_outline(&curriculum)).unwrap();
//! assert_eq!(again, curriculum);
//!
//! // Missing skills and goal are warnings, not errors.
//! assert!(validate(&curriculum).is_valid());
//! ```

#![doc = include_str!("../README.md")]

pub mod builtin;
pub mod loader;
pub mod markdown;
pub mod model;
pub mod text;
pub mod validate;
pub mod workbook;

// Re-export commonly used types
pub use loader::{OutlineFormat, load_outline, load_workbooks, parse_with_format};
pub use markdown::{parse_markdown, render_markdown};
pub use model::{Curriculum, DEFAULT_CATALOG, Level, Location, ProblemReference, Topic};
pub use text::{parse_outline, write_outline};
pub use validate::{Severity, ValidationReport, Violation, validate};
pub use workbook::{Exercise, Workbook, parse_workbook};
