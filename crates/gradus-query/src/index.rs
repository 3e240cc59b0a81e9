//! The borrowed curriculum index.
//!
//! Built once from a curriculum: every problem reference is flattened into
//! an [`Entry`] in document order, and entries are grouped by problem ID.

use std::collections::BTreeMap;

use gradus_outline::{Curriculum, Level, Location, ProblemReference, Topic};
use serde::Serialize;

/// One problem reference together with where it sits.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Enclosing level.
    pub level: &'a Level,
    /// Enclosing topic.
    pub topic: &'a Topic,
    /// The reference itself.
    pub problem: &'a ProblemReference,
}

impl Entry<'_> {
    /// Level rank and topic name of this entry.
    pub fn location(&self) -> Location {
        Location::new(self.level.rank, self.topic.name.clone())
    }
}

/// A problem ID listed more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    /// The repeated ID.
    pub id: u32,
    /// Title at the first occurrence.
    pub title: String,
    /// Every occurrence, in document order.
    pub locations: Vec<Location>,
}

/// Read-only lookups over a borrowed [`Curriculum`].
#[derive(Debug)]
pub struct CurriculumIndex<'a> {
    curriculum: &'a Curriculum,
    entries: Vec<Entry<'a>>,
    by_id: BTreeMap<u32, Vec<usize>>,
}

impl<'a> CurriculumIndex<'a> {
    /// Index a curriculum.
    pub fn new(curriculum: &'a Curriculum) -> Self {
        let entries: Vec<Entry<'a>> = curriculum
            .references()
            .map(|(level, topic, problem)| Entry {
                level,
                topic,
                problem,
            })
            .collect();

        let mut by_id: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            by_id.entry(entry.problem.id).or_default().push(position);
        }

        log::debug!(
            "Indexed {} reference(s), {} distinct problem(s)",
            entries.len(),
            by_id.len()
        );

        Self {
            curriculum,
            entries,
            by_id,
        }
    }

    /// The indexed curriculum.
    pub fn curriculum(&self) -> &'a Curriculum {
        self.curriculum
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    /// Entries for one problem ID, in document order.
    pub fn entries_for(&self, id: u32) -> impl Iterator<Item = &Entry<'a>> {
        self.by_id
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&position| &self.entries[position])
    }

    /// Every place a problem ID occurs, in document order.
    ///
    /// Returns an empty list for IDs the curriculum does not reference.
    pub fn locations(&self, id: u32) -> Vec<Location> {
        self.entries_for(id).map(Entry::location).collect()
    }

    /// `true` if the curriculum references `id` anywhere.
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Distinct problem IDs in order of first appearance.
    pub fn problem_ids(&self) -> Vec<u32> {
        let mut ids: Vec<(usize, u32)> = self
            .by_id
            .iter()
            .filter_map(|(&id, positions)| positions.first().map(|&first| (first, id)))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Number of distinct problem IDs.
    pub fn unique_count(&self) -> usize {
        self.by_id.len()
    }

    /// IDs listed more than once, in order of first appearance.
    pub fn duplicates(&self) -> Vec<Duplicate> {
        self.problem_ids()
            .into_iter()
            .filter_map(|id| {
                let entries: Vec<&Entry<'a>> = self.entries_for(id).collect();
                if entries.len() < 2 {
                    return None;
                }
                Some(Duplicate {
                    id,
                    title: entries[0].problem.title.clone(),
                    locations: entries.iter().map(|e| e.location()).collect(),
                })
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
