//! Queries over a parsed curriculum.
//!
//! [`CurriculumIndex`] borrows a [`Curriculum`](gradus_outline::Curriculum)
//! and answers lookups against it. Flashcard export lives alongside it in
//! [`flashcards`].
//!
//! # Modules
//!
//! - [`index`]: `CurriculumIndex`, problem locations, and duplicates
//! - [`search`]: Weighted text search
//! - [`topics`]: Exact and fuzzy topic resolution
//! - [`stats`]: Per-level counts
//! - [`coverage`]: Workbook exercise coverage
//! - [`flashcards`]: Flashcard generation and export
//!
//! # Example
//!
//! ```rust
//! use gradus_outline::builtin;
//! use gradus_query::CurriculumIndex;
//!
//! let curriculum = builtin::arrays().unwrap();
//! let index = CurriculumIndex::new(&curriculum);
//!
//! let places: Vec<String> = index.locations(1480).iter().map(|l| l.to_string()).collect();
//! assert_eq!(places, vec!["Level 1 / Traversal & Sum", "Level 3 / Prefix Sum Basic"]);
//! ```

#![doc = include_str!("../README.md")]

pub mod coverage;
pub mod flashcards;
pub mod index;
pub mod search;
pub mod stats;
pub mod topics;

// Re-export commonly used types
pub use coverage::{Coverage, OutsideLink};
pub use flashcards::{Flashcard, FlashcardScope, flashcards, to_json, to_tsv};
pub use index::{CurriculumIndex, Duplicate, Entry};
pub use search::SearchHit;
pub use stats::{CurriculumStats, LevelStats};
pub use topics::{DEFAULT_FUZZY_THRESHOLD, TopicMatch};
