//! Common test utilities: curriculum builders and proptest strategies.

#![allow(dead_code)]

use gradus_outline::{Curriculum, Level, ProblemReference, Topic};
use proptest::prelude::*;

/// A small two-level curriculum with a repeated problem.
pub fn sample_curriculum() -> Curriculum {
    let mut curriculum = Curriculum::new("Sample Curriculum")
        .with_level(
            Level::new(1, "Foundations")
                .with_skills("loops")
                .with_goal("iterate")
                .with_topic(
                    Topic::new("Traversal & Sum")
                        .with_problem(ProblemReference::new(1480, "Running Sum of 1D Array")),
                ),
        )
        .with_level(
            Level::new(2, "Prefix Sums")
                .with_skills("running totals")
                .with_goal("range queries")
                .with_topic(
                    Topic::new("Prefix Sum Basic")
                        .with_problem(ProblemReference::new(1480, "Running Sum of 1D Array"))
                        .with_problem(ProblemReference::new(303, "Range Sum Query - Immutable")),
                ),
        );
    curriculum.notes.push("Generated for tests.".to_string());
    curriculum
}

/// Tokens that collide with outline or Markdown syntax.
const AWKWARD_TOKENS: &[&str] = &[
    "Level", "LEVEL", "Level 1", "LEVEL 300 —", "Skills:", "Goal:", "LeetCode 1:", "->", "→",
    "—", "-", "+", "*", "#", "###", "1.", "2)", "1986.", "===", "---", "~~~", ">", "\\", "&",
    "&amp;", "&#35;", "`x`", "[a](b)", "<br>", "_em_", "**", "•", "⬜️",
];

/// One printable word: letters, any ASCII punctuation, or an awkward token.
pub fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z0-9]{0,8}",
        2 => "[!-~]{1,6}",
        2 => prop::sample::select(AWKWARD_TOKENS).prop_map(String::from),
    ]
}

/// One to three words separated by single spaces.
///
/// Always a single trimmed line, the only shape `validate` accepts for free
/// text.
pub fn words() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|w| w.join(" "))
}

/// Either empty or [`words`].
pub fn maybe_words() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), words()]
}

/// Catalog names `validate` accepts.
pub fn catalog() -> impl Strategy<Value = String> {
    prop_oneof![
        "(LeetCode|Codeforces)",
        "[A-Za-z][A-Za-z0-9_\\-]{0,6}".prop_filter("reserved for level headers", |name| {
            !name.eq_ignore_ascii_case("level")
        }),
    ]
}

pub fn problem() -> impl Strategy<Value = ProblemReference> {
    (catalog(), 1u32..100_000, words())
        .prop_map(|(catalog, id, title)| ProblemReference::in_catalog(catalog, id, title))
}

pub fn topic() -> impl Strategy<Value = Topic> {
    (words(), prop::collection::vec(problem(), 0..4))
        .prop_map(|(name, problems)| Topic { name, problems })
}

/// Curricula with ranks 1..=n whose free text is any printable text.
pub fn curriculum() -> impl Strategy<Value = Curriculum> {
    let level = (
        maybe_words(),
        maybe_words(),
        maybe_words(),
        prop::collection::vec(topic(), 0..4),
    );
    (
        maybe_words(),
        prop::collection::vec(words(), 0..3),
        prop::collection::vec(level, 0..5),
    )
        .prop_map(|(title, notes, levels)| Curriculum {
            title,
            notes,
            levels: levels
                .into_iter()
                .enumerate()
                .map(|(index, (title, skills, goal, topics))| Level {
                    rank: (index + 1) as u8,
                    title,
                    skills,
                    goal,
                    topics,
                })
                .collect(),
        })
}
