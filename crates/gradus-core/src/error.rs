//! Error types for Gradus.

use std::path::{Path, PathBuf};

/// Result type alias for Gradus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, checking, or querying a curriculum.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file or directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed outline, Markdown, or workbook text.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number (0 when no line applies)
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Structural validation failure.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// A level, topic, or problem lookup found nothing.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was looked up ("level", "topic", "problem")
        kind: &'static str,
        /// The key that was looked up
        key: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new parse error at the given 1-based line.
    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<K: Into<String>>(kind: &'static str, key: K) -> Self {
        Error::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns the line number for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(12, "reference before any topic");
        assert_eq!(
            err.to_string(),
            "Parse error at line 12: reference before any topic"
        );
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("level 3", "has no topics");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("level 3".to_string()));
        assert_eq!(message, "has no topics");
    }

    #[test]
    fn test_validation_without_field() {
        let err = Error::validation("outline has errors");
        assert_eq!(err.to_string(), "Validation error: outline has errors");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("level", "12");
        assert_eq!(err.to_string(), "level not found: 12");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("Invalid outline path");
        assert_eq!(err.to_string(), "Configuration error: Invalid outline path");
    }

    #[test]
    fn test_io_with_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(io_error, "/data/arrays.outline");
        assert!(err.to_string().contains("/data/arrays.outline"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err: Error = serde_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
