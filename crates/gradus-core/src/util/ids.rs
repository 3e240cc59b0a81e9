//! ID normalization utilities.
//!
//! Turns topic names into stable kebab-case slugs. Used for topic
//! resolution and flashcard tags.

/// Compute a URL/anchor-safe slug.
///
/// Lowercases, then turns every run of characters that are not
/// alphanumeric into a single hyphen; leading and trailing hyphens are
/// dropped.
///
/// # Examples
///
/// ```
/// use gradus_core::util::ids::slugify;
///
/// assert_eq!(slugify("Two Pointers (in-place)"), "two-pointers-in-place");
/// assert_eq!(slugify("Traversal & Sum"), "traversal-sum");
/// assert_eq!(slugify("Kadane's Algorithm"), "kadane-s-algorithm");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // slugify tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_slugify_parentheses() {
        assert_eq!(slugify("Two Pointers (in-place)"), "two-pointers-in-place");
    }

    #[test]
    fn test_slugify_ampersand() {
        assert_eq!(slugify("Traversal & Sum"), "traversal-sum");
    }

    #[test]
    fn test_slugify_digits() {
        assert_eq!(slugify("2D Prefix Sum"), "2d-prefix-sum");
    }

    #[test]
    fn test_slugify_unicode_dash() {
        assert_eq!(slugify("LEVEL 1 — Foundations"), "level-1-foundations");
    }

    #[test]
    fn test_slugify_only_punctuation() {
        assert_eq!(slugify("&&& ---"), "");
    }

    #[test]
    fn test_slugify_already_slug() {
        assert_eq!(slugify("sliding-window"), "sliding-window");
    }
}
