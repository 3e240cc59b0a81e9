//! The built-in curriculum, checked through the public API.

use gradus_outline::{Location, builtin, parse_markdown, render_markdown, validate};

#[test]
fn test_nine_levels_with_expected_topic_counts() {
    let c = builtin::arrays().unwrap();
    assert_eq!(c.levels.len(), 9);
    assert_eq!(c.levels[0].topics.len(), 10);
    assert_eq!(c.levels[8].topics.len(), 4);
}

#[test]
fn test_running_sum_locations() {
    let c = builtin::arrays().unwrap();
    let locations: Vec<Location> = c
        .references()
        .filter(|(_, _, p)| p.id == 1480)
        .map(|(level, topic, _)| Location::new(level.rank, topic.name.clone()))
        .collect();
    assert_eq!(
        locations,
        vec![
            Location::new(1, "Traversal & Sum"),
            Location::new(3, "Prefix Sum Basic"),
        ]
    );
}

#[test]
fn test_every_reference_is_well_formed() {
    let c = builtin::arrays().unwrap();
    for (level, topic, problem) in c.references() {
        assert!(problem.id > 0, "{} / {}", level.rank, topic.name);
        assert!(!problem.title.is_empty(), "{} / {}", level.rank, topic.name);
    }
    for level in &c.levels {
        assert!(!level.title.is_empty());
        assert!(!level.topics.is_empty());
        for topic in &level.topics {
            assert!(!topic.problems.is_empty(), "{}", topic.name);
        }
    }
    assert!(validate(&c).is_valid());
}

#[test]
fn test_builtin_markdown_round_trip() {
    let c = builtin::arrays().unwrap();
    assert_eq!(parse_markdown(&render_markdown(&c)).unwrap(), c);
}

#[test]
fn test_builtin_json_round_trip() {
    let c = builtin::arrays().unwrap();
    let json = serde_json::to_string_pretty(&c).unwrap();
    let back: gradus_outline::Curriculum = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
