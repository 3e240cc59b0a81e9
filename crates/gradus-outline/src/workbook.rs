//! Workbook exercise scanning.
//!
//! Practice workbooks are scripts whose exercises are introduced by comment
//! headings:
//!
//! ```text
//! # EXERCISE 2.4 — Two Sum II (Input Array is Sorted) (LC 167)
//! # ⬜️ EXERCISE 12 — Search Insert Position (LC 35)
//! # EXERCISE 2.10 — Minimum Window Substring (LC 76) [ADVANCED]
//! ```
//!
//! Only the headings are read. A trailing `(LC n)` links the exercise to a
//! problem ID, `[ADVANCED]` marks a stretch exercise and a leading `⬜️`
//! marks one that is still open. The first `LEVEL n — Title` line names the
//! workbook.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)]
static EXERCISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*#\s*(⬜\x{FE0F}?\s*)?(?:[✅✔]\x{FE0F}?\s*)?",
        r"EXERCISE\s+([0-9]+(?:\.[0-9]+)*)\s*[—–:\-]+\s*(.+?)\s*$",
    ))
    .expect("Invalid exercise regex")
});

#[allow(clippy::expect_used)]
static WORKBOOK_LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bLEVEL\s+([0-9]+)\s*[—–:\-]+\s*(.+?)\s*$").expect("Invalid workbook level regex")
});

#[allow(clippy::expect_used)]
static ADVANCED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\[advanced\]\s*").expect("Invalid advanced regex"));

#[allow(clippy::expect_used)]
static PROBLEM_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(LC\s*([0-9]+)\)\s*$").expect("Invalid problem link regex"));

/// One exercise heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise number as written, e.g. `2.4`.
    pub number: String,
    /// Heading title without markers.
    pub title: String,
    /// Linked problem ID from a trailing `(LC n)`.
    pub problem: Option<u32>,
    /// Marked `[ADVANCED]`.
    pub advanced: bool,
    /// Marked open with `⬜️`.
    pub pending: bool,
}

/// Exercises found in one workbook file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// File the workbook was read from, when loaded from disk.
    pub source: Option<PathBuf>,
    /// Title from the `LEVEL n — Title` line.
    pub title: Option<String>,
    /// Level rank from the same line.
    pub level: Option<u8>,
    /// Exercises in file order.
    pub exercises: Vec<Exercise>,
}

impl Workbook {
    /// Problem IDs linked by this workbook's exercises, in order.
    pub fn linked_problems(&self) -> impl Iterator<Item = u32> + '_ {
        self.exercises.iter().filter_map(|e| e.problem)
    }

    /// Number of exercises still marked open.
    pub fn pending_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.pending).count()
    }
}

/// Scan workbook text for its title and exercise headings.
///
/// Lines that are not headings are ignored, so this never fails.
///
/// # Example
///
/// ```rust
/// use gradus_outline::parse_workbook;
///
/// let text = "# LEVEL 2 — TWO POINTERS\n# EXERCISE 2.2 — Remove Element (LC 27)\ndef f(): pass\n";
/// let wb = parse_workbook(text);
/// assert_eq!(wb.level, Some(2));
/// assert_eq!(wb.exercises[0].number, "2.2");
/// assert_eq!(wb.exercises[0].problem, Some(27));
/// ```
pub fn parse_workbook(text: &str) -> Workbook {
    let mut workbook = Workbook::default();

    for line in text.lines() {
        if let Some(exercise) = match_exercise(line) {
            workbook.exercises.push(exercise);
            continue;
        }
        if workbook.title.is_none() {
            if let Some(caps) = WORKBOOK_LEVEL_RE.captures(line) {
                let digits = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                workbook.level = digits.parse().ok();
                if workbook.level.is_none() {
                    log::warn!("workbook level {digits} is out of range");
                }
                workbook.title = caps.get(2).map(|m| m.as_str().to_string());
            }
        }
    }

    workbook
}

fn match_exercise(line: &str) -> Option<Exercise> {
    let caps = EXERCISE_RE.captures(line)?;
    let pending = caps.get(1).is_some();
    let number = caps.get(2)?.as_str().to_string();
    let raw_title = caps.get(3)?.as_str();

    let advanced = ADVANCED_RE.is_match(raw_title);
    let title = ADVANCED_RE.replace_all(raw_title, " ");
    let title = title.trim();

    let (title, problem) = match PROBLEM_LINK_RE.captures(title) {
        Some(link) => {
            let start = link.get(0).map(|m| m.start()).unwrap_or(title.len());
            let id = link.get(1).and_then(|m| m.as_str().parse().ok());
            (title[..start].trim().to_string(), id)
        }
        None => (title.to_string(), None),
    };

    Some(Exercise {
        number,
        title,
        problem,
        advanced,
        pending,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const LEVEL_TWO: &str = r#"
# =============================================================================
# 🧩 LEVEL 2 — TWO POINTERS & SLIDING WINDOW (Python Workbook)
# =============================================================================
# General rule for this level:
# EXERCISE 2.1 — Remove Duplicates from Sorted Array (LC 26)
def remove_duplicates(nums):
    pass
# EXERCISE 2.8 — Fruit Into Baskets (LC 904)
# EXERCISE 2.10 — Minimum Window Substring (LC 76) [ADVANCED]
"#;

    const LEVEL_ONE: &str = r#"
"""
LEVEL 1 — Array/List Foundations Workbook
"""
# EXERCISE 1 — Traversing & Summing
# ⬜️ EXERCISE 9 — Basic Condition: Kids With the Greatest Number of Candies (LC 1431)
# ⬜️ EXERCISE 12 — Search Insert Position (LC 35)
"#;

    #[test]
    fn test_workbook_title_with_emoji_prefix() {
        let wb = parse_workbook(LEVEL_TWO);
        assert_eq!(wb.level, Some(2));
        assert_eq!(
            wb.title.as_deref(),
            Some("TWO POINTERS & SLIDING WINDOW (Python Workbook)")
        );
    }

    #[test]
    fn test_workbook_title_in_docstring() {
        let wb = parse_workbook(LEVEL_ONE);
        assert_eq!(wb.level, Some(1));
        assert_eq!(wb.title.as_deref(), Some("Array/List Foundations Workbook"));
    }

    #[test]
    fn test_exercises_with_links() {
        let wb = parse_workbook(LEVEL_TWO);
        assert_eq!(wb.exercises.len(), 3);
        assert_eq!(wb.exercises[0].number, "2.1");
        assert_eq!(wb.exercises[0].title, "Remove Duplicates from Sorted Array");
        assert_eq!(wb.exercises[0].problem, Some(26));
        assert_eq!(wb.linked_problems().collect::<Vec<_>>(), vec![26, 904, 76]);
    }

    #[test]
    fn test_advanced_marker() {
        let wb = parse_workbook(LEVEL_TWO);
        let last = wb.exercises.last().unwrap();
        assert!(last.advanced);
        assert_eq!(last.title, "Minimum Window Substring");
        assert_eq!(last.problem, Some(76));
        assert!(!wb.exercises[0].advanced);
    }

    #[test]
    fn test_pending_marker_and_inner_colon() {
        let wb = parse_workbook(LEVEL_ONE);
        assert_eq!(wb.exercises.len(), 3);
        assert!(!wb.exercises[0].pending);
        assert_eq!(wb.exercises[0].problem, None);

        let candies = &wb.exercises[1];
        assert!(candies.pending);
        assert_eq!(candies.number, "9");
        assert_eq!(
            candies.title,
            "Basic Condition: Kids With the Greatest Number of Candies"
        );
        assert_eq!(candies.problem, Some(1431));
        assert_eq!(wb.pending_count(), 2);
    }

    #[test]
    fn test_no_exercises() {
        let wb = parse_workbook("print('hello')\n");
        assert_eq!(wb, Workbook::default());
    }

    #[test]
    fn test_exercise_heading_without_comment_marker_is_ignored() {
        assert!(parse_workbook("EXERCISE 1 — Not a heading\n").exercises.is_empty());
    }
}
