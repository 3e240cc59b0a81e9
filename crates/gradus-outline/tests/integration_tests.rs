//! Integration test suite for gradus-outline.
//!
//! Exercises the text and Markdown formats end to end against the built-in
//! curriculum and against generated curricula.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
