//! The embedded array/list curriculum.
//!
//! Nine levels, from first loops to dynamic programming on arrays, shipped
//! inside the binary so the CLI works without any files.

use gradus_core::Result;

use crate::model::Curriculum;
use crate::text::parse_outline;

/// Source text of the built-in curriculum.
pub const ARRAYS_OUTLINE: &str = include_str!("../data/arrays.outline");

/// Parse the built-in curriculum.
///
/// # Example
///
/// ```rust
/// let c = gradus_outline::builtin::arrays().unwrap();
/// assert_eq!(c.levels.len(), 9);
/// ```
pub fn arrays() -> Result<Curriculum> {
    parse_outline(ARRAYS_OUTLINE)
}
