//! Markdown reading.
//!
//! Walks `pulldown-cmark` events and maps blocks onto the model:
//!
//! - `#` heading → curriculum title
//! - paragraphs before the first level → notes
//! - `##` heading → level (`Level N — Title`)
//! - `*Skills:*` / `**Goal:**` paragraphs → level fields
//! - `###` heading → topic
//! - list items → problem references
//!
//! Inline formatting is stripped before matching, so `*Skills:* loops`
//! reads as `Skills: loops`.

use gradus_core::{Error, Result};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::model::{Curriculum, Level, Topic};
use crate::text::helpers::{Label, match_label, match_level_header, match_reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading(HeadingLevel),
    Paragraph,
    Item,
}

/// Parse Markdown produced by [`super::render_markdown`] (or written by hand
/// in the same shape) into a [`Curriculum`].
///
/// # Errors
///
/// Returns [`Error::Parse`] with the 1-based line of the offending block
/// when a heading, paragraph, or list item does not fit the layout.
///
/// # Example
///
/// ```rust
/// use gradus_outline::parse_markdown;
///
/// let md = "# Arrays\n\n## Level 1 — Foundations\n\n### Traversal & Sum\n\n\
///           - LeetCode 1480: Running Sum of 1D Array\n";
/// let c = parse_markdown(md).unwrap();
/// assert_eq!(c.title, "Arrays");
/// assert_eq!(c.levels[0].topics[0].problems[0].id, 1480);
/// ```
pub fn parse_markdown(content: &str) -> Result<Curriculum> {
    let mut curriculum = Curriculum::default();
    let mut current: Option<(BlockKind, usize)> = None;
    let mut text = String::new();

    for (event, range) in Parser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((BlockKind::Heading(level), range.start));
                text.clear();
            }
            Event::Start(Tag::Item) => {
                current = Some((BlockKind::Item, range.start));
                text.clear();
            }
            // Paragraphs inside list items belong to the item.
            Event::Start(Tag::Paragraph) if current.is_none() => {
                current = Some((BlockKind::Paragraph, range.start));
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Item) => {
                if let Some((kind, start)) = current.take() {
                    apply_block(&mut curriculum, kind, text.trim(), line_of(content, start))?;
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some((BlockKind::Paragraph, start)) = current {
                    current = None;
                    apply_block(
                        &mut curriculum,
                        BlockKind::Paragraph,
                        text.trim(),
                        line_of(content, start),
                    )?;
                }
            }
            Event::Text(t) | Event::Code(t) if current.is_some() => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if current.is_some() => text.push(' '),
            _ => {}
        }
    }

    Ok(curriculum)
}

fn apply_block(
    curriculum: &mut Curriculum,
    kind: BlockKind,
    text: &str,
    line: usize,
) -> Result<()> {
    match kind {
        BlockKind::Heading(HeadingLevel::H1) => {
            if !curriculum.levels.is_empty() || !curriculum.title.is_empty() {
                return Err(Error::parse(line, "unexpected second title heading"));
            }
            curriculum.title = text.to_string();
        }
        BlockKind::Heading(HeadingLevel::H2) => {
            let (rank, title) = match_level_header(text, line)?.ok_or_else(|| {
                Error::parse(line, format!("expected 'Level N — Title', found {text:?}"))
            })?;
            curriculum.levels.push(Level::new(rank, title));
        }
        BlockKind::Heading(HeadingLevel::H3) => {
            let level = current_level(curriculum, line, "topic heading")?;
            level.topics.push(Topic::new(text));
        }
        BlockKind::Heading(other) => {
            return Err(Error::parse(line, format!("unsupported heading level {other:?}")));
        }
        BlockKind::Paragraph => match curriculum.levels.last_mut() {
            None => curriculum.notes.push(text.to_string()),
            Some(level) => {
                let (label, value) = match_label(text).ok_or_else(|| {
                    Error::parse(line, format!("unrecognized paragraph in level {}", level.rank))
                })?;
                let (field, name) = match label {
                    Label::Skills => (&mut level.skills, "skills"),
                    Label::Goal => (&mut level.goal, "goal"),
                };
                if !field.is_empty() {
                    return Err(Error::parse(
                        line,
                        format!("level {} already has a {name} paragraph", level.rank),
                    ));
                }
                *field = value;
            }
        },
        BlockKind::Item => {
            let problem = match_reference(text, line)?.ok_or_else(|| {
                Error::parse(line, format!("expected a problem reference, found {text:?}"))
            })?;
            let level = current_level(curriculum, line, "problem reference")?;
            let topic = level.topics.last_mut().ok_or_else(|| {
                Error::parse(line, format!("problem reference {problem} appears before any topic"))
            })?;
            topic.problems.push(problem);
        }
    }
    Ok(())
}

fn current_level<'a>(
    curriculum: &'a mut Curriculum,
    line: usize,
    what: &str,
) -> Result<&'a mut Level> {
    curriculum
        .levels
        .last_mut()
        .ok_or_else(|| Error::parse(line, format!("{what} appears before any level")))
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset.min(content.len())].matches('\n').count() + 1
}

// ============================================================================
// Tests
// ============================================================================
