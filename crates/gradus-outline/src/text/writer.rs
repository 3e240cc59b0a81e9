//! Canonical outline writer.
//!
//! Emits the layout [`super::parser`] reads: a preamble, then one ruled
//! header per level, the skills line, topics with their references as
//! indented continuation lines, and the goal line. Empty skills or goals
//! are omitted. Preamble lines and topic names that the parser would read
//! as something else are prefixed with [`LITERAL_MARKER`].

use std::fmt::Write as _;

use super::helpers::{INLINE_ARROWS, LITERAL_MARKER, is_rule, looks_like_level_header};
use crate::model::{Curriculum, Level};

const RULE_WIDTH: usize = 62;
const REFERENCE_INDENT: &str = "    ";

/// Write a curriculum in the canonical outline layout.
///
/// For every curriculum whose text passes [`crate::validate`]'s text checks
/// (single trimmed lines, non-empty notes, one-word catalogs),
/// `parse_outline(&write_outline(c)) == c`.
///
/// # Example
///
/// ```rust
/// use gradus_outline::{Curriculum, Level, ProblemReference, Topic, write_outline};
///
/// let c = Curriculum::new("Arrays").with_level(
///     Level::new(1, "Foundations").with_topic(
///         Topic::new("Traversal & Sum")
///             .with_problem(ProblemReference::new(1480, "Running Sum of 1D Array")),
///     ),
/// );
///
/// let text = write_outline(&c);
/// assert!(text.contains("# LEVEL 1 — Foundations"));
/// assert!(text.contains("#     LeetCode 1480: Running Sum of 1D Array"));
/// ```
pub fn write_outline(curriculum: &Curriculum) -> String {
    let mut out = String::new();

    if !curriculum.title.is_empty() || !curriculum.notes.is_empty() {
        preamble_line(&mut out, &curriculum.title);
    }
    for note in &curriculum.notes {
        preamble_line(&mut out, note);
    }

    for level in &curriculum.levels {
        if !out.is_empty() {
            out.push('\n');
        }
        write_level(&mut out, level);
    }

    out
}

fn write_level(out: &mut String, level: &Level) {
    let rule = "=".repeat(RULE_WIDTH);
    line(out, &rule);
    if level.title.is_empty() {
        line(out, &format!("LEVEL {}", level.rank));
    } else {
        line(out, &format!("LEVEL {} — {}", level.rank, level.title));
    }
    line(out, &rule);

    if !level.skills.is_empty() {
        line(out, &format!("Skills: {}", level.skills));
    }
    line(out, "");

    for topic in &level.topics {
        if INLINE_ARROWS.iter().any(|arrow| topic.name.contains(arrow))
            || topic.name.starts_with(LITERAL_MARKER)
        {
            line(out, &format!("- {LITERAL_MARKER}{}", topic.name));
        } else {
            line(out, &format!("- {}", topic.name));
        }
        for problem in &topic.problems {
            line(out, &format!("{REFERENCE_INDENT}{problem}"));
        }
    }

    if !level.goal.is_empty() {
        line(out, "");
        line(out, &format!("Goal: {}", level.goal));
    }
}

fn preamble_line(out: &mut String, text: &str) {
    if text.is_empty()
        || text.starts_with(LITERAL_MARKER)
        || is_rule(text)
        || looks_like_level_header(text)
    {
        line(out, &format!("{LITERAL_MARKER}{text}"));
    } else {
        line(out, text);
    }
}

fn line(out: &mut String, body: &str) {
    if body.is_empty() {
        out.push_str("#\n");
    } else {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "# {body}");
    }
}

// ============================================================================
// Tests
// ============================================================================
