//! Gradus Core — shared errors, traits, and utilities.
//!
//! This crate provides the foundational types used across all Gradus crates.
//! It has no internal Gradus dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: The [`ConfigManager`](traits::ConfigManager) trait
//! - [`util`]: Slug and path utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigManager;

// Convenience re-exports from util
pub use util::ids::slugify;
pub use util::paths::expand_tilde;
