//! Error types for gradus-cli

use thiserror::Error;

/// Result type alias for gradus-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gradus-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the library crates
    #[error(transparent)]
    Core(#[from] gradus_core::Error),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// A topic name resolved to nothing
    #[error("No topic matches '{name}'{}", did_you_mean(.suggestions))]
    TopicNotFound {
        /// The name as given.
        name: String,
        /// Closest topic names.
        suggestions: Vec<String>,
    },
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Core(gradus_core::Error::config(message))
    }

    /// Shorthand for a missing item.
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::Core(gradus_core::Error::not_found(kind, key))
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(". Did you mean: {}?", suggestions.join(", "))
    }
}
