//! Line classification for the outline format.
//!
//! The readers ([`super::parser`] and [`crate::markdown`]) share these
//! matchers so a level header or a problem reference means the same thing
//! in every format.
//!
//! # Key Functions
//!
//! - [`comment_body`]: Strip the leading `#` from an outline line
//! - [`is_rule`]: Recognize `=====` / `-----` separator lines
//! - [`match_level_header`]: `LEVEL 3 — Prefix Sums`
//! - [`match_reference`]: `LeetCode 1480: Running Sum of 1D Array`
//! - [`split_inline_reference`]: `Topic → LeetCode 1: Two Sum`
//!
//! A body starting with [`LITERAL_MARKER`] is taken as plain text: the
//! writer adds it to preamble lines and topic names that would otherwise
//! read as a rule, a level header, or an inline reference.

use std::sync::LazyLock;

use gradus_core::{Error, Result};
use regex::Regex;

use crate::model::ProblemReference;

#[allow(clippy::expect_used)]
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[=\-~*_#]{3,}$").expect("Invalid rule regex"));

#[allow(clippy::expect_used)]
static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:level)\s+([0-9]+)(?:\s*[—–:\-]+\s*|\s+|$)(.*)$")
        .expect("Invalid level header regex")
});

#[allow(clippy::expect_used)]
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(skills?|goals?)\s*:\s*(.*)$").expect("Invalid label regex")
});

#[allow(clippy::expect_used)]
static TOPIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("Invalid topic regex"));

#[allow(clippy::expect_used)]
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[•+]\s*)?([A-Za-z][A-Za-z0-9_\-]*)\s+([0-9]+)\s*:\s*(.*)$")
        .expect("Invalid reference regex")
});

#[allow(clippy::expect_used)]
static CATALOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]*$").expect("Invalid catalog regex"));

/// Separator between a topic name and an inline first reference.
pub const INLINE_ARROWS: [&str; 2] = ["→", "->"];

/// Prefix marking the rest of a line as literal text.
pub const LITERAL_MARKER: char = '\\';

/// A labelled level field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// `Skills:` line.
    Skills,
    /// `Goal:` line.
    Goal,
}

/// Strip the comment marker from an outline line.
///
/// Returns the trimmed text after the first `#`, an empty string for blank
/// lines, or an error for non-comment content.
///
/// # Example
///
/// ```rust
/// use gradus_outline::text::helpers::comment_body;
///
/// assert_eq!(comment_body("#   - Sliding Window", 1).unwrap(), "- Sliding Window");
/// assert_eq!(comment_body("   ", 2).unwrap(), "");
/// assert!(comment_body("nums = [1, 2, 3]", 3).is_err());
/// ```
pub fn comment_body(line: &str, line_no: usize) -> Result<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok("");
    }
    match trimmed.strip_prefix('#') {
        Some(rest) => Ok(rest.trim()),
        None => Err(Error::parse(
            line_no,
            format!("expected a comment line starting with '#', found {trimmed:?}"),
        )),
    }
}

/// Check whether a comment body is a decorative rule (`=====`, `-----`).
pub fn is_rule(body: &str) -> bool {
    RULE_RE.is_match(body)
}

/// Match a level header, returning the rank and title.
///
/// The rank must fit in a `u8`.
///
/// # Example
///
/// ```rust
/// use gradus_outline::text::helpers::match_level_header;
///
/// let (rank, title) = match_level_header("LEVEL 3 — Prefix Sums", 1).unwrap().unwrap();
/// assert_eq!(rank, 3);
/// assert_eq!(title, "Prefix Sums");
///
/// assert!(match_level_header("Skills: loops", 1).unwrap().is_none());
/// assert!(match_level_header("LEVEL 900 — Too deep", 1).is_err());
/// ```
pub fn match_level_header(body: &str, line_no: usize) -> Result<Option<(u8, String)>> {
    let Some(caps) = LEVEL_RE.captures(body) else {
        return Ok(None);
    };
    let digits = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let title = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
    let rank = digits
        .parse::<u8>()
        .map_err(|_| Error::parse(line_no, format!("level rank {digits} is out of range")))?;
    Ok(Some((rank, title.to_string())))
}

/// Check whether a body has the shape of a level header, whatever its rank.
pub fn looks_like_level_header(body: &str) -> bool {
    LEVEL_RE.is_match(body)
}

/// Strip a leading [`LITERAL_MARKER`].
///
/// # Example
///
/// ```rust
/// use gradus_outline::text::helpers::strip_literal;
///
/// assert_eq!(strip_literal(r"\LEVEL 1 is the warm-up"), Some("LEVEL 1 is the warm-up"));
/// assert_eq!(strip_literal("LEVEL 1 — Foundations"), None);
/// ```
pub fn strip_literal(body: &str) -> Option<&str> {
    body.strip_prefix(LITERAL_MARKER)
}

/// Check whether `name` can be written as the catalog of a reference line.
///
/// A catalog is one word starting with a letter. `Level` is excluded
/// because `Level 3: ...` reads as a level header.
pub fn is_catalog_name(name: &str) -> bool {
    CATALOG_RE.is_match(name) && !name.eq_ignore_ascii_case("level")
}

/// Match a `Skills:` or `Goal:` line.
pub fn match_label(body: &str) -> Option<(Label, String)> {
    let caps = LABEL_RE.captures(body)?;
    let key = caps.get(1).map(|m| m.as_str().to_lowercase())?;
    let value = caps.get(2).map(|m| m.as_str().trim().to_string())?;
    let label = if key.starts_with("skill") {
        Label::Skills
    } else {
        Label::Goal
    };
    Some((label, value))
}

/// Match a topic bullet, returning the raw text after the bullet.
pub fn match_topic(body: &str) -> Option<&str> {
    TOPIC_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Split `Topic → Reference` into its two parts.
///
/// Returns the text unchanged and `None` when no arrow is present.
pub fn split_inline_reference(text: &str) -> (&str, Option<&str>) {
    for arrow in INLINE_ARROWS {
        if let Some((name, reference)) = text.split_once(arrow) {
            return (name.trim(), Some(reference.trim()));
        }
    }
    (text.trim(), None)
}

/// Match a problem reference.
///
/// Returns `Ok(None)` when the text does not look like a reference and an
/// error when it does but the ID does not fit in a `u32`.
///
/// # Example
///
/// ```rust
/// use gradus_outline::text::helpers::match_reference;
///
/// let p = match_reference("LeetCode 1480: Running Sum of 1D Array", 1)
///     .unwrap()
///     .unwrap();
/// assert_eq!(p.catalog, "LeetCode");
/// assert_eq!(p.id, 1480);
/// assert_eq!(p.title, "Running Sum of 1D Array");
/// ```
pub fn match_reference(text: &str, line_no: usize) -> Result<Option<ProblemReference>> {
    let Some(caps) = REFERENCE_RE.captures(text) else {
        return Ok(None);
    };
    let catalog = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let digits = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let title = caps.get(3).map(|m| m.as_str()).unwrap_or("").trim();
    let id = digits
        .parse::<u32>()
        .map_err(|_| Error::parse(line_no, format!("problem id {digits} is out of range")))?;
    Ok(Some(ProblemReference::in_catalog(catalog, id, title)))
}

// ============================================================================
// Tests
// ============================================================================
