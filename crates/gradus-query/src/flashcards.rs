//! Flashcard generation.
//!
//! One card per problem reference: the front names the problem, the back
//! names where it sits in the curriculum. Cards export as tab-separated
//! text that Anki imports directly (front, back, tags) or as JSON.

use gradus_core::{Error, Result, slugify};
use gradus_outline::{Curriculum, ProblemReference};
use serde::Serialize;

/// Which references become cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashcardScope {
    /// Only this level, when set.
    pub level: Option<u8>,
}

impl FlashcardScope {
    /// Every level.
    pub fn all() -> Self {
        Self::default()
    }

    /// A single level.
    pub fn level(rank: u8) -> Self {
        Self { level: Some(rank) }
    }
}

/// One flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    /// Question side, e.g. `LeetCode 1480: Running Sum of 1D Array`.
    pub front: String,
    /// Answer side, e.g. `Level 1 — Array Foundations / Traversal & Sum`.
    pub back: String,
    /// Space-separated tags: `level-N` and the topic slug.
    pub tags: String,
    /// The underlying reference.
    pub problem: ProblemReference,
}

/// Build cards for the references in `scope`, in document order.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the scope names a level the curriculum
/// does not have.
///
/// # Example
///
/// ```rust
/// use gradus_outline::builtin;
/// use gradus_query::{FlashcardScope, flashcards};
///
/// let c = builtin::arrays().unwrap();
/// let cards = flashcards(&c, FlashcardScope::level(3)).unwrap();
/// assert_eq!(cards[0].front, "LeetCode 1480: Running Sum of 1D Array");
/// assert_eq!(cards[0].back, "Level 3 — Prefix Sums & Hashing / Prefix Sum Basic");
/// ```
pub fn flashcards(curriculum: &Curriculum, scope: FlashcardScope) -> Result<Vec<Flashcard>> {
    if let Some(rank) = scope.level {
        if curriculum.level(rank).is_none() {
            return Err(Error::not_found("level", rank.to_string()));
        }
    }

    let cards: Vec<Flashcard> = curriculum
        .references()
        .filter(|(level, _, _)| scope.level.is_none_or(|rank| rank == level.rank))
        .map(|(level, topic, problem)| {
            let heading = if level.title.is_empty() {
                format!("Level {}", level.rank)
            } else {
                format!("Level {} — {}", level.rank, level.title)
            };
            Flashcard {
                front: problem.to_string(),
                back: format!("{heading} / {}", topic.name),
                tags: format!("level-{} {}", level.rank, slugify(&topic.name)),
                problem: problem.clone(),
            }
        })
        .collect();

    log::debug!("Generated {} flashcard(s)", cards.len());
    Ok(cards)
}

/// Render cards as tab-separated lines: front, back, tags.
///
/// Tabs and line breaks inside fields are replaced with spaces so every
/// card stays on one line.
pub fn to_tsv(cards: &[Flashcard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&tsv_field(&card.front));
        out.push('\t');
        out.push_str(&tsv_field(&card.back));
        out.push('\t');
        out.push_str(&tsv_field(&card.tags));
        out.push('\n');
    }
    out
}

/// Render cards as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if encoding fails.
pub fn to_json(cards: &[Flashcard]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

fn tsv_field(text: &str) -> String {
    text.replace(['\t', '\r', '\n'], " ")
}

// ============================================================================
// Tests
// ============================================================================
