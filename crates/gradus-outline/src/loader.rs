//! Async file loading.
//!
//! Outlines are loaded by extension: `.md`/`.markdown` files are read as
//! Markdown, anything else as outline text. Workbooks are loaded from a
//! single directory level, sorted by path so output is stable.

use std::path::{Path, PathBuf};

use gradus_core::util::paths::has_extension;
use gradus_core::{Error, Result};

use crate::markdown::parse_markdown;
use crate::model::Curriculum;
use crate::text::parse_outline;
use crate::workbook::{Workbook, parse_workbook};

/// Extensions read as Markdown.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Extensions scanned for workbook exercises.
pub const WORKBOOK_EXTENSIONS: &[&str] = &["py", "txt", "md"];

/// Textual form of a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineFormat {
    /// Comment-formatted outline text.
    #[default]
    Text,
    /// Markdown as produced by [`crate::render_markdown`].
    Markdown,
}

impl OutlineFormat {
    /// Pick the format from a file extension.
    ///
    /// ```rust
    /// use gradus_outline::OutlineFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(OutlineFormat::from_path(Path::new("a/levels.md")), OutlineFormat::Markdown);
    /// assert_eq!(OutlineFormat::from_path(Path::new("a/levels.py")), OutlineFormat::Text);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        if has_extension(path, MARKDOWN_EXTENSIONS) {
            Self::Markdown
        } else {
            Self::Text
        }
    }
}

/// Parse text in the given format.
pub fn parse_with_format(text: &str, format: OutlineFormat) -> Result<Curriculum> {
    match format {
        OutlineFormat::Text => parse_outline(text),
        OutlineFormat::Markdown => parse_markdown(text),
    }
}

/// Load and parse an outline file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
/// if its content is malformed.
pub async fn load_outline(path: impl AsRef<Path>) -> Result<Curriculum> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    let format = OutlineFormat::from_path(path);
    log::debug!("Loading {:?} outline from {}", format, path.display());
    parse_with_format(&text, format)
}

/// Load every workbook file directly inside `dir`.
///
/// Files that cannot be decoded as UTF-8 are skipped with a warning; files
/// without exercise headings are kept (with no exercises) so callers can
/// report them.
pub async fn load_workbooks(dir: impl AsRef<Path>) -> Result<Vec<Workbook>> {
    let dir = dir.as_ref();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        if path.is_file() && has_extension(&path, WORKBOOK_EXTENSIONS) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut workbooks = Vec::with_capacity(paths.len());
    for path in paths {
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                log::warn!("Skipping {}: not valid UTF-8", path.display());
                continue;
            }
            Err(e) => return Err(Error::io_with_path(e, &path)),
        };
        let mut workbook = parse_workbook(&text);
        log::debug!(
            "{}: {} exercise(s)",
            path.display(),
            workbook.exercises.len()
        );
        workbook.source = Some(path);
        workbooks.push(workbook);
    }

    Ok(workbooks)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutlineFormat::from_path(Path::new("x.MARKDOWN")), OutlineFormat::Markdown);
        assert_eq!(OutlineFormat::from_path(Path::new("x.outline")), OutlineFormat::Text);
        assert_eq!(OutlineFormat::from_path(Path::new("x")), OutlineFormat::Text);
    }

    #[tokio::test]
    async fn test_load_outline_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("arrays.outline");
        tokio::fs::write(&path, "# Arrays\n# LEVEL 1 — A\n# - T\n#   LeetCode 1: Two Sum\n")
            .await
            .unwrap();

        let c = load_outline(&path).await.unwrap();
        assert_eq!(c.title, "Arrays");
        assert_eq!(c.levels[0].topics[0].problems[0].id, 1);
    }

    #[tokio::test]
    async fn test_load_outline_markdown() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("arrays.md");
        tokio::fs::write(&path, "# Arrays\n\n## Level 1 — A\n\n### T\n\n- LeetCode 1: Two Sum\n")
            .await
            .unwrap();

        let c = load_outline(&path).await.unwrap();
        assert_eq!(c.levels[0].title, "A");
    }

    #[tokio::test]
    async fn test_load_outline_missing_file() {
        let err = load_outline("/nonexistent/gradus/arrays.outline")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_workbooks_sorted_and_filtered() {
        let dir = tempfile::TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("b_level_two.py"), "# EXERCISE 2.1 — A (LC 26)\n")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("a_level_one.py"), "# EXERCISE 1 — B\n")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("image.png"), [0u8, 159, 146, 150])
            .await
            .unwrap();
        tokio::fs::create_dir(dir.path().join("nested.py")).await.unwrap();

        let workbooks = load_workbooks(dir.path()).await.unwrap();
        assert_eq!(workbooks.len(), 2);
        assert!(workbooks[0].source.as_ref().unwrap().ends_with("a_level_one.py"));
        assert_eq!(workbooks[1].exercises[0].problem, Some(26));
    }

    #[tokio::test]
    async fn test_load_workbooks_skips_invalid_utf8() {
        let dir = tempfile::TempDir::new().unwrap();
        tokio::fs::write(dir.path().join("bad.txt"), [0xffu8, 0xfe, 0xfd])
            .await
            .unwrap();
        let workbooks = load_workbooks(dir.path()).await.unwrap();
        assert!(workbooks.is_empty());
    }

    #[tokio::test]
    async fn test_load_workbooks_missing_dir() {
        assert!(load_workbooks("/nonexistent/gradus/workbooks").await.is_err());
    }
}
