//! Outline text parser.
//!
//! Reads the comment-formatted outline line by line:
//!
//! ```text
//! # Array & List Algorithms Curriculum
//! # Work through the levels in order.
//! #
//! # ==========================================
//! # LEVEL 1 — Array Foundations
//! # ==========================================
//! # Skills: traversal, accumulators, counting
//! #
//! # - Traversal & Sum
//! #     LeetCode 1480: Running Sum of 1D Array
//! # - Two Pointers (in-place) → LeetCode 26: Remove Duplicates from Sorted Array
//! #
//! # Goal: iterate confidently over a list.
//! ```
//!
//! Everything before the first level header is preamble: its first line is
//! the curriculum title and the rest are notes. Inside a level every line
//! must be a skills/goal label, a topic, or a reference; anything else is a
//! parse error carrying the 1-based line number.
//!
//! A preamble line or topic name that starts with `\` is literal text: the
//! marker is dropped and the rest is not matched against headers, rules, or
//! inline references.

use gradus_core::{Error, Result};

use super::helpers::{
    Label, comment_body, is_rule, match_label, match_level_header, match_reference, match_topic,
    split_inline_reference, strip_literal,
};
use crate::model::{Curriculum, Level, Topic};

/// Parse outline text into a [`Curriculum`].
///
/// Parsing checks syntax only; run [`crate::validate`] for the structural
/// rules (non-empty titles, at least one topic per level, ...).
///
/// # Errors
///
/// Returns [`Error::Parse`] for non-comment lines, content in the wrong
/// place (a topic before any level, a reference before any topic), repeated
/// skills/goal lines, out-of-range numbers, and unrecognized lines.
///
/// # Example
///
/// ```rust
/// use gradus_outline::text::parse_outline;
///
/// let text = "#  LEVEL 9 — Dynamic Programming\n\
///             ##  - Kadane's Algorithm → LeetCode 53: Maximum Subarray\n";
/// let curriculum = parse_outline(text).unwrap();
///
/// let topic = &curriculum.levels[0].topics[0];
/// assert_eq!(topic.name, "Kadane's Algorithm");
/// assert_eq!(topic.problems[0].id, 53);
/// ```
pub fn parse_outline(text: &str) -> Result<Curriculum> {
    let mut curriculum = Curriculum::default();
    let mut preamble_lines = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let body = comment_body(raw, line_no)?;
        if body.is_empty() || is_rule(body) {
            continue;
        }

        if let Some((rank, title)) = match_level_header(body, line_no)? {
            log::debug!("line {line_no}: level {rank} {title:?}");
            curriculum.levels.push(Level::new(rank, title));
            continue;
        }

        match curriculum.levels.last_mut() {
            None => {
                push_preamble(&mut curriculum, body, preamble_lines == 0);
                preamble_lines += 1;
            }
            Some(level) => parse_level_line(level, body, line_no)?,
        }
    }

    log::debug!(
        "parsed outline: {} levels, {} topics, {} references",
        curriculum.levels.len(),
        curriculum.topic_count(),
        curriculum.problem_count()
    );
    Ok(curriculum)
}

fn push_preamble(curriculum: &mut Curriculum, body: &str, first: bool) {
    let text = strip_literal(body).unwrap_or(body).to_string();
    if first {
        curriculum.title = text;
    } else {
        curriculum.notes.push(text);
    }
}

fn parse_level_line(level: &mut Level, body: &str, line_no: usize) -> Result<()> {
    if let Some((label, value)) = match_label(body) {
        let (field, name) = match label {
            Label::Skills => (&mut level.skills, "skills"),
            Label::Goal => (&mut level.goal, "goal"),
        };
        if !field.is_empty() {
            return Err(Error::parse(
                line_no,
                format!("level {} already has a {name} line", level.rank),
            ));
        }
        *field = value;
        return Ok(());
    }

    if let Some(text) = match_topic(body) {
        let (name, inline) = match strip_literal(text) {
            Some(literal) => (literal, None),
            None => split_inline_reference(text),
        };
        let mut topic = Topic::new(name);
        if let Some(reference) = inline {
            let problem = match_reference(reference, line_no)?.ok_or_else(|| {
                Error::parse(
                    line_no,
                    format!("expected a problem reference after the arrow, found {reference:?}"),
                )
            })?;
            topic.problems.push(problem);
        }
        level.topics.push(topic);
        return Ok(());
    }

    if let Some(problem) = match_reference(body, line_no)? {
        let topic = level.topics.last_mut().ok_or_else(|| {
            Error::parse(
                line_no,
                format!("problem reference {problem} appears before any topic"),
            )
        })?;
        topic.problems.push(problem);
        return Ok(());
    }

    Err(Error::parse(
        line_no,
        format!("unrecognized line in level {}: {body:?}", level.rank),
    ))
}

// ============================================================================
// Tests
// ============================================================================
