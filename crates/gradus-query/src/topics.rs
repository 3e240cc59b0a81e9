//! Topic resolution by name.
//!
//! Names are compared by slug, so `two pointers in place` finds
//! `Two Pointers (in-place)`. When no slug matches exactly, the closest
//! topic by Jaro-Winkler similarity is accepted if it clears a threshold.

use gradus_core::slugify;
use gradus_outline::{Level, Location, Topic};

use crate::index::CurriculumIndex;

/// Similarity a fuzzy match must reach when no threshold is configured.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// A topic found by [`CurriculumIndex::resolve_topic`].
#[derive(Debug, Clone, Copy)]
pub struct TopicMatch<'a> {
    /// Enclosing level.
    pub level: &'a Level,
    /// The topic.
    pub topic: &'a Topic,
    /// 1.0 for an exact slug match, otherwise the Jaro-Winkler similarity.
    pub similarity: f64,
}

impl TopicMatch<'_> {
    /// `true` when the slug matched exactly.
    pub fn is_exact(&self) -> bool {
        self.similarity >= 1.0
    }

    /// Level rank and topic name.
    pub fn location(&self) -> Location {
        Location::new(self.level.rank, self.topic.name.clone())
    }
}

impl<'a> CurriculumIndex<'a> {
    /// Resolve a topic name.
    ///
    /// Returns every topic carrying the resolved name, in document order,
    /// since the same topic can be revisited at a later level. The result is
    /// empty when nothing matches exactly and no candidate reaches
    /// `threshold`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gradus_outline::builtin;
    /// use gradus_query::{CurriculumIndex, DEFAULT_FUZZY_THRESHOLD};
    ///
    /// let c = builtin::arrays().unwrap();
    /// let index = CurriculumIndex::new(&c);
    ///
    /// let found = index.resolve_topic("monotonic stak", DEFAULT_FUZZY_THRESHOLD);
    /// assert_eq!(found[0].topic.name, "Monotonic Stack");
    /// assert!(!found[0].is_exact());
    /// ```
    pub fn resolve_topic(&self, name: &str, threshold: f64) -> Vec<TopicMatch<'a>> {
        let wanted = slugify(name);
        if wanted.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<(&'a Level, &'a Topic, String)> = self
            .curriculum()
            .levels
            .iter()
            .flat_map(|level| {
                level
                    .topics
                    .iter()
                    .map(move |topic| (level, topic, slugify(&topic.name)))
            })
            .collect();

        let exact: Vec<TopicMatch<'a>> = candidates
            .iter()
            .filter(|(_, _, slug)| *slug == wanted)
            .map(|&(level, topic, _)| TopicMatch {
                level,
                topic,
                similarity: 1.0,
            })
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let mut best: Option<(f64, &str)> = None;
        for (_, _, slug) in &candidates {
            let similarity = strsim::jaro_winkler(&wanted, slug);
            if best.is_none_or(|(score, _)| similarity > score) {
                best = Some((similarity, slug.as_str()));
            }
        }

        match best {
            Some((similarity, slug)) if similarity >= threshold => {
                log::debug!("topic '{name}' resolved to '{slug}' ({similarity:.3})");
                candidates
                    .iter()
                    .filter(|(_, _, candidate)| candidate == slug)
                    .map(|&(level, topic, _)| TopicMatch {
                        level,
                        topic,
                        similarity,
                    })
                    .collect()
            }
            _ => {
                log::debug!("topic '{name}' did not resolve");
                Vec::new()
            }
        }
    }

    /// Topic names closest to `name`, best first, for "did you mean" hints.
    pub fn suggest_topics(&self, name: &str, limit: usize) -> Vec<&'a str> {
        let wanted = slugify(name);
        let mut scored: Vec<(f64, &'a str)> = Vec::new();
        for level in &self.curriculum().levels {
            for topic in &level.topics {
                if scored.iter().any(|(_, seen)| *seen == topic.name) {
                    continue;
                }
                let similarity = strsim::jaro_winkler(&wanted, &slugify(&topic.name));
                scored.push((similarity, topic.name.as_str()));
            }
        }
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, name)| name).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gradus_outline::builtin;

    #[test]
    fn test_exact_slug_match() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let found = index.resolve_topic("prefix sum basic", DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_exact());
        assert_eq!(found[0].location(), Location::new(3, "Prefix Sum Basic"));
    }

    #[test]
    fn test_exact_match_ignores_punctuation() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let found = index.resolve_topic("TRAVERSAL_SUM", DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(found[0].topic.name, "Traversal & Sum");
    }

    #[test]
    fn test_repeated_topic_returns_all_levels() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let found = index.resolve_topic("two pointers in place", DEFAULT_FUZZY_THRESHOLD);
        let ranks: Vec<u8> = found.iter().map(|m| m.level.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_fuzzy_match() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let found = index.resolve_topic("difference aray", DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].topic.name, "Difference Array");
        assert!(found[0].similarity < 1.0);
        assert!(found[0].similarity >= DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn test_below_threshold() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        assert!(index.resolve_topic("segment trees", 0.95).is_empty());
    }

    #[test]
    fn test_empty_name() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        assert!(index.resolve_topic(" -- ", 0.0).is_empty());
    }

    #[test]
    fn test_suggestions() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let suggestions = index.suggest_topics("monotonic", 2);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|s| s.starts_with("Monotonic")));
    }

    #[test]
    fn test_suggestions_are_distinct() {
        let c = builtin::arrays().unwrap();
        let index = CurriculumIndex::new(&c);
        let suggestions = index.suggest_topics("two pointers in place", 3);
        assert_eq!(suggestions[0], "Two Pointers (in-place)");
        assert_ne!(suggestions[1], "Two Pointers (in-place)");
    }
}
