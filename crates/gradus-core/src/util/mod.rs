//! Utility modules for ID computation and path handling.
//!
//! # Modules
//!
//! - [`ids`]: Slug computation
//! - [`paths`]: Path helpers (tilde expansion, extension checks)

pub mod ids;
pub mod paths;
