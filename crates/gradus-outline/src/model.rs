//! Curriculum data model.
//!
//! A [`Curriculum`] is an ordered list of [`Level`]s; each level holds
//! ordered [`Topic`]s and each topic holds ordered [`ProblemReference`]s.
//! Everything is plain owned data: curricula are authored once and read
//! many times, so there is no interior mutability and no shared ownership.
//!
//! Structural equality (`PartialEq`) is the round-trip criterion for the
//! text and Markdown formats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog used when a reference does not name one.
pub const DEFAULT_CATALOG: &str = "LeetCode";

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

// ============================================================================
// ProblemReference
// ============================================================================

/// A pointer to an external practice problem.
///
/// IDs are not unique across a curriculum: the same problem may be listed
/// under several topics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemReference {
    /// Catalog the ID belongs to (e.g. "LeetCode").
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Catalog ID.
    pub id: u32,
    /// Problem title.
    pub title: String,
}

impl ProblemReference {
    /// Create a reference into the default catalog.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gradus_outline::ProblemReference;
    ///
    /// let p = ProblemReference::new(1480, "Running Sum of 1D Array");
    /// assert_eq!(p.to_string(), "LeetCode 1480: Running Sum of 1D Array");
    /// ```
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            catalog: default_catalog(),
            id,
            title: title.into(),
        }
    }

    /// Create a reference into a named catalog.
    pub fn in_catalog(catalog: impl Into<String>, id: u32, title: impl Into<String>) -> Self {
        Self {
            catalog: catalog.into(),
            id,
            title: title.into(),
        }
    }
}

impl fmt::Display for ProblemReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.catalog, self.id, self.title)
    }
}

// ============================================================================
// Topic
// ============================================================================

/// A named algorithmic pattern with its practice problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Pattern name, e.g. "Sliding Window".
    pub name: String,
    /// Problems in the order they are listed.
    #[serde(default)]
    pub problems: Vec<ProblemReference>,
}

impl Topic {
    /// Create an empty topic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            problems: Vec::new(),
        }
    }

    /// Append a problem (builder style).
    pub fn with_problem(mut self, problem: ProblemReference) -> Self {
        self.problems.push(problem);
        self
    }

    /// Check whether this topic lists the given problem ID.
    pub fn contains(&self, id: u32) -> bool {
        self.problems.iter().any(|p| p.id == id)
    }
}

// ============================================================================
// Level
// ============================================================================

/// A difficulty tier grouping related topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Ordinal rank, starting at 1.
    pub rank: u8,
    /// Level title.
    pub title: String,
    /// Short skills summary (may be empty).
    #[serde(default)]
    pub skills: String,
    /// One-line goal statement (may be empty).
    #[serde(default)]
    pub goal: String,
    /// Topics in the order they are listed.
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Level {
    /// Create an empty level.
    pub fn new(rank: u8, title: impl Into<String>) -> Self {
        Self {
            rank,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the skills summary (builder style).
    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    /// Set the goal statement (builder style).
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Append a topic (builder style).
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Find a topic by exact name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Number of problem references across all topics.
    pub fn problem_count(&self) -> usize {
        self.topics.iter().map(|t| t.problems.len()).sum()
    }
}

// ============================================================================
// Curriculum
// ============================================================================

/// A complete outline: title, preamble notes, and levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Document title (first preamble line).
    #[serde(default)]
    pub title: String,
    /// Remaining preamble lines.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Levels in document order.
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl Curriculum {
    /// Create an empty curriculum.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append a level (builder style).
    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.push(level);
        self
    }

    /// Find a level by rank.
    pub fn level(&self, rank: u8) -> Option<&Level> {
        self.levels.iter().find(|l| l.rank == rank)
    }

    /// Total number of topics.
    pub fn topic_count(&self) -> usize {
        self.levels.iter().map(|l| l.topics.len()).sum()
    }

    /// Total number of problem references (duplicates counted).
    pub fn problem_count(&self) -> usize {
        self.levels.iter().map(Level::problem_count).sum()
    }

    /// Iterate over every reference with its level and topic, in document order.
    pub fn references(&self) -> impl Iterator<Item = (&Level, &Topic, &ProblemReference)> {
        self.levels.iter().flat_map(|level| {
            level.topics.iter().flat_map(move |topic| {
                topic
                    .problems
                    .iter()
                    .map(move |problem| (level, topic, problem))
            })
        })
    }
}

// ============================================================================
// Location
// ============================================================================

/// Where a problem reference occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Rank of the containing level.
    pub level: u8,
    /// Name of the containing topic.
    pub topic: String,
}

impl Location {
    /// Create a location.
    pub fn new(level: u8, topic: impl Into<String>) -> Self {
        Self {
            level,
            topic: topic.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} / {}", self.level, self.topic)
    }
}

// ============================================================================
// Tests
// ============================================================================
