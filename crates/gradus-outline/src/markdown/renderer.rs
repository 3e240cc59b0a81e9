//! Markdown rendering.
//!
//! Layout:
//!
//! ```markdown
//! # Array Curriculum
//!
//! Work top to bottom.
//!
//! ## Level 1 — Foundations
//!
//! *Skills:* traversal, counting
//!
//! ### Traversal & Sum
//!
//! - LeetCode 1480: Running Sum of 1D Array
//!
//! **Goal:** iterate confidently.
//! ```

use std::fmt::Write as _;

use crate::model::{Curriculum, Level};

/// Render a curriculum as Markdown.
///
/// The output is read back by [`super::parse_markdown`].
///
/// # Example
///
/// ```rust
/// use gradus_outline::{Curriculum, Level, render_markdown};
///
/// let c = Curriculum::new("Arrays").with_level(Level::new(1, "Foundations"));
/// let md = render_markdown(&c);
/// assert!(md.starts_with("# Arrays\n"));
/// assert!(md.contains("## Level 1 — Foundations"));
/// ```
pub fn render_markdown(curriculum: &Curriculum) -> String {
    let mut out = String::new();

    if !curriculum.title.is_empty() {
        block(&mut out, &format!("# {}", escape_inline(&curriculum.title)));
    }
    for note in &curriculum.notes {
        block(&mut out, &escape_block(note));
    }
    for level in &curriculum.levels {
        render_level(&mut out, level);
    }

    out
}

fn render_level(out: &mut String, level: &Level) {
    if level.title.is_empty() {
        block(out, &format!("## Level {}", level.rank));
    } else {
        block(
            out,
            &format!("## Level {} — {}", level.rank, escape_inline(&level.title)),
        );
    }

    if !level.skills.is_empty() {
        block(out, &format!("*Skills:* {}", escape_inline(&level.skills)));
    }

    for topic in &level.topics {
        block(out, &format!("### {}", escape_inline(&topic.name)));
        if !topic.problems.is_empty() {
            let mut list = String::new();
            for problem in &topic.problems {
                let _ = writeln!(list, "- {}", escape_inline(&problem.to_string()));
            }
            block(out, list.trim_end());
        }
    }

    if !level.goal.is_empty() {
        block(out, &format!("**Goal:** {}", escape_inline(&level.goal)));
    }
}

fn block(out: &mut String, text: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(text);
    out.push('\n');
}

/// Backslash-escape characters that would otherwise start inline markup.
///
/// `&` is escaped only where it could open an entity (`&amp;`, `&#35;`).
///
/// # Example
///
/// ```rust
/// use gradus_outline::markdown::renderer::escape_inline;
///
/// assert_eq!(escape_inline("a*b_c"), r"a\*b\_c");
/// assert_eq!(escape_inline("Kadane's Algorithm"), "Kadane's Algorithm");
/// assert_eq!(escape_inline("&amp; & more"), r"\&amp; & more");
/// ```
pub fn escape_inline(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let entity =
            c == '&' && chars.peek().is_some_and(|n| n.is_ascii_alphanumeric() || *n == '#');
        if entity || matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '#') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// [`escape_inline`], plus the markers that open a block when they start a
/// line: list bullets (`-`, `+`), ordered list numbers (`1.`, `2)`), rules
/// and setext underlines (`---`, `===`), and fences (`~~~`).
///
/// # Example
///
/// ```rust
/// use gradus_outline::markdown::renderer::escape_block;
///
/// assert_eq!(escape_block("1. Work top to bottom."), r"1\. Work top to bottom.");
/// assert_eq!(escape_block("- not a list"), r"\- not a list");
/// assert_eq!(escape_block("Plain - text 1."), "Plain - text 1.");
/// ```
pub fn escape_block(text: &str) -> String {
    let escaped = escape_inline(text);
    if escaped.starts_with(['-', '+', '=', '~']) {
        return format!("\\{escaped}");
    }
    let digits = escaped.len() - escaped.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && escaped[digits..].starts_with(['.', ')']) {
        return format!("{}\\{}", &escaped[..digits], &escaped[digits..]);
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================
