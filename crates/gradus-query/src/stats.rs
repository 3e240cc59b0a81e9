//! Curriculum statistics.

use serde::Serialize;

use crate::index::CurriculumIndex;

/// Counts for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Level rank.
    pub rank: u8,
    /// Level title.
    pub title: String,
    /// Number of topics.
    pub topics: usize,
    /// Number of problem references.
    pub references: usize,
}

/// Counts for the whole curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumStats {
    /// Per-level counts in document order.
    pub levels: Vec<LevelStats>,
    /// Total topics.
    pub topics: usize,
    /// Total problem references.
    pub references: usize,
    /// Distinct problem IDs.
    pub unique_problems: usize,
    /// IDs listed more than once.
    pub repeated_problems: usize,
}

impl CurriculumIndex<'_> {
    /// Per-level and total counts.
    pub fn stats(&self) -> CurriculumStats {
        let curriculum = self.curriculum();
        CurriculumStats {
            levels: curriculum
                .levels
                .iter()
                .map(|level| LevelStats {
                    rank: level.rank,
                    title: level.title.clone(),
                    topics: level.topics.len(),
                    references: level.problem_count(),
                })
                .collect(),
            topics: curriculum.topic_count(),
            references: self.entries().len(),
            unique_problems: self.unique_count(),
            repeated_problems: self.duplicates().len(),
        }
    }
}
