//! # gradus-cli
//!
//! The `gradus` command-line tool.
//!
//! - [`cli`]: clap argument definitions
//! - [`commands`]: one function per subcommand, writing to any `Write`
//! - [`config`]: `GradusConfig` and its sections
//! - [`config_handlers`]: `gradus config path|get|set|init|export`
//! - [`logging`]: subscriber setup from `-v`/`-q`, config, and `RUST_LOG`

#![doc = include_str!("../README.md")]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use cli::Cli;
pub use commands::{Outcome, load_config, run};
pub use config::GradusConfig;
pub use error::{Error, Result};
