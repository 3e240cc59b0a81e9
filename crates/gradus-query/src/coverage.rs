//! Workbook coverage.
//!
//! Compares the problem IDs linked from workbook exercises (`(LC n)`) with
//! the IDs the curriculum references.

use std::collections::HashSet;
use std::path::PathBuf;

use gradus_outline::Workbook;
use serde::Serialize;

use crate::index::CurriculumIndex;

/// An exercise linking a problem the curriculum does not list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsideLink {
    /// Workbook file, if known.
    pub source: Option<PathBuf>,
    /// Exercise number as written.
    pub exercise: String,
    /// The linked problem ID.
    pub problem: u32,
}

/// Result of [`CurriculumIndex::coverage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Curriculum IDs linked by at least one exercise, in curriculum order.
    pub covered: Vec<u32>,
    /// Curriculum IDs no exercise links, in curriculum order.
    pub uncovered: Vec<u32>,
    /// Exercises linking IDs outside the curriculum, in workbook order.
    pub outside: Vec<OutsideLink>,
}

impl Coverage {
    /// Fraction of curriculum problems with an exercise, from 0.0 to 1.0.
    pub fn ratio(&self) -> f64 {
        let total = self.covered.len() + self.uncovered.len();
        if total == 0 {
            return 0.0;
        }
        self.covered.len() as f64 / total as f64
    }
}

impl CurriculumIndex<'_> {
    /// Match workbook exercises against the curriculum.
    pub fn coverage(&self, workbooks: &[Workbook]) -> Coverage {
        let mut linked: HashSet<u32> = HashSet::new();
        let mut outside = Vec::new();

        for workbook in workbooks {
            for exercise in &workbook.exercises {
                let Some(id) = exercise.problem else {
                    continue;
                };
                linked.insert(id);
                if !self.contains(id) {
                    outside.push(OutsideLink {
                        source: workbook.source.clone(),
                        exercise: exercise.number.clone(),
                        problem: id,
                    });
                }
            }
        }

        let (covered, uncovered): (Vec<u32>, Vec<u32>) = self
            .problem_ids()
            .into_iter()
            .partition(|id| linked.contains(id));

        log::debug!(
            "coverage: {} covered, {} uncovered, {} outside",
            covered.len(),
            uncovered.len(),
            outside.len()
        );

        Coverage {
            covered,
            uncovered,
            outside,
        }
    }
}
