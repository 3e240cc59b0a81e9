//! Configuration for the `gradus` command.
//!
//! ```toml
//! [outline]
//! path = "~/notes/arrays.outline"
//! workbook_dir = "~/notes/workbooks"
//!
//! [search]
//! default_limit = 10
//! fuzzy_threshold = 0.85
//!
//! [flashcards]
//! format = "tsv"
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::PathBuf;

use clap::ValueEnum;
use gradus_core::{ConfigManager, expand_tilde};
use gradus_query::DEFAULT_FUZZY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradusConfig {
    /// Where curriculum and workbook files live.
    #[serde(default)]
    pub outline: OutlineConfig,

    /// Search and topic lookup.
    #[serde(default)]
    pub search: SearchConfig,

    /// Flashcard export.
    #[serde(default)]
    pub flashcards: FlashcardConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigManager for GradusConfig {
    fn project_name() -> &'static str {
        "gradus"
    }
}

impl GradusConfig {
    /// Configured outline file, with `~` expanded.
    pub fn outline_path(&self) -> Option<PathBuf> {
        self.outline.path.as_deref().map(expand_tilde)
    }

    /// Configured workbook directory, with `~` expanded.
    pub fn workbook_dir(&self) -> Option<PathBuf> {
        self.outline.workbook_dir.as_deref().map(expand_tilde)
    }
}

/// `[outline]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Outline file to use instead of the built-in curriculum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Default directory for `gradus workbooks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workbook_dir: Option<String>,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Hits shown when `--limit` is not given.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Minimum Jaro-Winkler similarity for fuzzy topic matches.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

fn default_limit() -> usize {
    10
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

/// Flashcard output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlashcardFormat {
    /// Tab-separated front, back, tags.
    #[default]
    Tsv,
    /// JSON array.
    Json,
}

/// `[flashcards]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashcardConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: FlashcardFormat,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for Gradus crates when neither `-v`/`-q` nor `RUST_LOG` is set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
