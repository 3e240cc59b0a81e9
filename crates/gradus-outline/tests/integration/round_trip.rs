//! Parse/write round trips for both textual forms.

use gradus_outline::{
    Curriculum, OutlineFormat, Topic, parse_markdown, parse_outline, parse_with_format,
    render_markdown, validate, write_outline,
};
use proptest::prelude::*;

use crate::common::{curriculum, sample_curriculum};

#[test]
fn test_sample_text_round_trip() {
    let c = sample_curriculum();
    assert_eq!(parse_outline(&write_outline(&c)).unwrap(), c);
}

#[test]
fn test_sample_markdown_round_trip() {
    let c = sample_curriculum();
    assert_eq!(parse_markdown(&render_markdown(&c)).unwrap(), c);
}

#[test]
fn test_text_to_markdown_to_text() {
    let c = sample_curriculum();
    let via_markdown = parse_with_format(&render_markdown(&c), OutlineFormat::Markdown).unwrap();
    let text = write_outline(&via_markdown);
    assert_eq!(text, write_outline(&c));
}

#[test]
fn test_inline_reference_normalizes_to_block_form() {
    let inline = "# T\n# LEVEL 1 — A\n# - Hash Map → LeetCode 1: Two Sum\n";
    let block = "# T\n# LEVEL 1 — A\n# - Hash Map\n#   LeetCode 1: Two Sum\n";
    assert_eq!(parse_outline(inline).unwrap(), parse_outline(block).unwrap());
}

/// Sample curriculum with free text that looks like outline or Markdown syntax.
fn awkward_curriculum() -> Curriculum {
    let mut c = sample_curriculum();
    c.notes = vec![
        "Level 1 is the warm-up.".into(),
        "1. Work top to bottom.".into(),
        "==========".into(),
        "- Skills: none yet".into(),
        r"\ literal".into(),
    ];
    let problems = c.levels[0].topics[0].problems.clone();
    c.levels[0].topics.push(Topic {
        name: "Array -> Hash Map".into(),
        problems,
    });
    c.levels[1].goal = "LEVEL 3 — next".into();
    c
}

#[test]
fn test_awkward_text_is_valid() {
    assert!(validate(&awkward_curriculum()).is_valid());
}

#[test]
fn test_awkward_text_round_trip() {
    let c = awkward_curriculum();
    let back = parse_outline(&write_outline(&c)).unwrap();
    assert_eq!(back.levels.len(), 2);
    assert_eq!(back, c);
}

#[test]
fn test_awkward_markdown_round_trip() {
    let c = awkward_curriculum();
    assert_eq!(parse_markdown(&render_markdown(&c)).unwrap(), c);
}

proptest! {
    #[test]
    fn prop_text_round_trip(c in curriculum()) {
        let text = write_outline(&c);
        prop_assert_eq!(parse_outline(&text).unwrap(), c);
    }

    #[test]
    fn prop_markdown_round_trip(c in curriculum()) {
        let md = render_markdown(&c);
        prop_assert_eq!(parse_markdown(&md).unwrap(), c);
    }
}
