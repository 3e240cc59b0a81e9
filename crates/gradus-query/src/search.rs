//! Weighted text search over problem references.
//!
//! Each reference is scored by case-insensitive substring matching:
//!
//! | Field                                  | Weight |
//! |----------------------------------------|--------|
//! | Reference (`LeetCode 1480: Title`)     | 3.0    |
//! | Topic name                             | 2.0    |
//! | Level title, skills, or goal           | 1.0    |
//!
//! Hits are ordered by score, then by position in the curriculum. An empty
//! query or `*` matches every reference with score 1.0.

use gradus_outline::{Location, ProblemReference};
use serde::Serialize;

use crate::index::{CurriculumIndex, Entry};

const REFERENCE_WEIGHT: f32 = 3.0;
const TOPIC_WEIGHT: f32 = 2.0;
const LEVEL_WEIGHT: f32 = 1.0;

/// One search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Relevance score.
    pub score: f32,
    /// Where the reference sits.
    pub location: Location,
    /// The matched reference.
    pub problem: ProblemReference,
}

impl CurriculumIndex<'_> {
    /// Search references, returning at most `limit` hits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gradus_outline::builtin;
    /// use gradus_query::CurriculumIndex;
    ///
    /// let c = builtin::arrays().unwrap();
    /// let index = CurriculumIndex::new(&c);
    /// let hits = index.search("deque", 3);
    /// assert_eq!(hits[0].problem.id, 239);
    /// ```
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let query = query.trim();
        let mut hits: Vec<SearchHit> = self
            .entries()
            .iter()
            .filter_map(|entry| {
                let score = relevance(entry, query);
                (score > 0.0).then(|| SearchHit {
                    score,
                    location: entry.location(),
                    problem: entry.problem.clone(),
                })
            })
            .collect();

        // Stable sort keeps document order among equal scores.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(limit);

        log::debug!("search '{query}': {} hit(s)", hits.len());
        hits
    }
}

fn relevance(entry: &Entry<'_>, query: &str) -> f32 {
    if query.is_empty() || query == "*" {
        return 1.0;
    }

    let query = query.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query);
    let mut score = 0.0;

    if matches(&entry.problem.to_string()) {
        score += REFERENCE_WEIGHT;
    }
    if matches(&entry.topic.name) {
        score += TOPIC_WEIGHT;
    }
    let level = entry.level;
    if matches(&level.title) || matches(&level.skills) || matches(&level.goal) {
        score += LEVEL_WEIGHT;
    }

    score
}

// ============================================================================
// Tests
// ============================================================================
