//! Gradus curriculum toolkit — umbrella crate.
//!
//! This crate re-exports all Gradus components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use gradus_core as core;
pub use gradus_outline as outline;

#[cfg(feature = "query")]
pub use gradus_query as query;

#[cfg(feature = "cli")]
pub use gradus_cli as cli;
