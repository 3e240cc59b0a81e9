//! Structural validation.
//!
//! Parsing only checks syntax. [`validate`] checks the structural rules a
//! usable curriculum must satisfy and reports every problem it finds
//! instead of stopping at the first.
//!
//! Errors:
//! - a level with an empty title or without topics
//! - level ranks that do not run 1, 2, ... in order
//! - a topic with an empty name or without problem references
//! - a reference with ID 0, an empty title, or a catalog that is not one
//!   word starting with a letter (`Level` is reserved)
//! - an empty note
//! - any title, note, name, or summary that spans several lines or has
//!   leading or trailing whitespace
//!
//! Warnings:
//! - a level without a skills summary or goal statement
//! - the same topic name twice within one level

use std::collections::HashSet;
use std::fmt;

use gradus_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Curriculum, Level, Topic};
use crate::text::helpers::is_catalog_name;

/// How serious a violation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Worth fixing, but the curriculum is usable.
    Warning,
    /// The curriculum breaks a structural rule.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Error or warning.
    pub severity: Severity,
    /// Where it is, e.g. `level 3 / Prefix Sum Basic / #2`.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

/// All violations found in one curriculum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations in document order.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// `true` when there are no errors (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Iterate over error-level violations.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
    }

    /// Iterate over warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
    }

    /// Convert to a `Result`, failing with the first error.
    pub fn into_result(self) -> Result<()> {
        let count = self.errors().count();
        match self.violations.into_iter().find(|v| v.severity == Severity::Error) {
            None => Ok(()),
            Some(first) => Err(Error::validation_field(
                first.path,
                format!("{} ({count} error(s) in total)", first.message),
            )),
        }
    }

    fn push(&mut self, severity: Severity, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation {
            severity,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Check a curriculum's structural rules.
///
/// # Example
///
/// ```rust
/// use gradus_outline::{Curriculum, Level, validate};
///
/// let c = Curriculum::new("Arrays").with_level(Level::new(1, "Foundations"));
/// let report = validate(&c);
/// assert!(!report.is_valid());
/// assert_eq!(report.errors().next().unwrap().message, "level has no topics");
/// ```
pub fn validate(curriculum: &Curriculum) -> ValidationReport {
    let mut report = ValidationReport::default();

    if curriculum.levels.is_empty() {
        report.push(Severity::Error, "curriculum", "curriculum has no levels");
    }
    check_line(&mut report, "curriculum", "title", &curriculum.title);
    for (index, note) in curriculum.notes.iter().enumerate() {
        let path = format!("notes / #{}", index + 1);
        if note.is_empty() {
            report.push(Severity::Error, &path, "note is empty");
        }
        check_line(&mut report, &path, "note", note);
    }

    for (index, level) in curriculum.levels.iter().enumerate() {
        let expected = index + 1;
        if usize::from(level.rank) != expected {
            report.push(
                Severity::Error,
                format!("level {}", level.rank),
                format!("expected rank {expected}, ranks must run 1, 2, ... in order"),
            );
        }
        validate_level(&mut report, level);
    }

    log::debug!(
        "validation: {} error(s), {} warning(s)",
        report.errors().count(),
        report.warnings().count()
    );
    report
}

fn validate_level(report: &mut ValidationReport, level: &Level) {
    let path = format!("level {}", level.rank);

    if level.title.trim().is_empty() {
        report.push(Severity::Error, &path, "level title is empty");
    }
    if level.topics.is_empty() {
        report.push(Severity::Error, &path, "level has no topics");
    }
    if level.skills.trim().is_empty() {
        report.push(Severity::Warning, &path, "level has no skills summary");
    }
    if level.goal.trim().is_empty() {
        report.push(Severity::Warning, &path, "level has no goal statement");
    }
    check_line(report, &path, "level title", &level.title);
    check_line(report, &path, "skills summary", &level.skills);
    check_line(report, &path, "goal statement", &level.goal);

    let mut seen = HashSet::new();
    for topic in &level.topics {
        if !seen.insert(topic.name.as_str()) {
            report.push(
                Severity::Warning,
                format!("{path} / {}", topic.name),
                "topic name repeats within the level",
            );
        }
        validate_topic(report, &path, topic);
    }
}

fn validate_topic(report: &mut ValidationReport, level_path: &str, topic: &Topic) {
    let path = format!("{level_path} / {}", topic.name);

    if topic.name.trim().is_empty() {
        report.push(Severity::Error, &path, "topic name is empty");
    }
    if topic.problems.is_empty() {
        report.push(Severity::Error, &path, "topic has no problem references");
    }
    check_line(report, &path, "topic name", &topic.name);

    for (index, problem) in topic.problems.iter().enumerate() {
        let problem_path = format!("{path} / #{}", index + 1);
        if problem.id == 0 {
            report.push(
                Severity::Error,
                &problem_path,
                "problem id must be a positive integer",
            );
        }
        if problem.title.trim().is_empty() {
            report.push(Severity::Error, &problem_path, "problem title is empty");
        }
        check_line(report, &problem_path, "problem title", &problem.title);
        if problem.catalog.trim().is_empty() {
            report.push(Severity::Error, &problem_path, "catalog name is empty");
        } else if !is_catalog_name(&problem.catalog) {
            report.push(
                Severity::Error,
                &problem_path,
                format!(
                    "catalog name {:?} must be one word starting with a letter, other than 'Level'",
                    problem.catalog
                ),
            );
        }
    }
}

/// Free text must fit on one outline line and survive trimming.
fn check_line(report: &mut ValidationReport, path: &str, what: &str, value: &str) {
    if value.contains(['\n', '\r']) {
        report.push(Severity::Error, path, format!("{what} spans more than one line"));
    } else if value != value.trim() {
        report.push(
            Severity::Error,
            path,
            format!("{what} has leading or trailing whitespace"),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
