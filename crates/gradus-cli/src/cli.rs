//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::FlashcardFormat;

/// Browse, validate, and export an array/list algorithms curriculum
#[derive(Parser, Debug)]
#[command(name = "gradus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Outline file (text or Markdown) to use instead of the built-in curriculum
    #[arg(long, global = true, env = "GRADUS_OUTLINE")]
    pub outline: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Output format for `render`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Comment-formatted outline text
    #[default]
    Outline,
    /// Markdown
    Markdown,
    /// Pretty-printed JSON
    Json,
    /// TOML
    Toml,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List levels with topic and problem counts
    Levels,

    /// Show one level with its topics and problems
    Show {
        /// Level rank
        rank: u8,
    },

    /// Find where a problem ID appears
    Find {
        /// Problem ID, e.g. 1480
        id: u32,
    },

    /// Search problems, topics, and level summaries
    Search {
        /// Text to search for (`*` lists everything)
        query: String,

        /// Maximum number of hits
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Look up a topic by (approximate) name
    Topic {
        /// Topic name
        name: String,
    },

    /// Check structural rules; exits non-zero on errors
    Validate,

    /// Show per-level and total counts
    Stats,

    /// List problem IDs that appear more than once
    Duplicates,

    /// Print the curriculum in another format
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value = "outline")]
        format: RenderFormat,
    },

    /// Export flashcards
    Flashcards {
        /// Only this level
        #[arg(long)]
        level: Option<u8>,

        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<FlashcardFormat>,
    },

    /// List workbook exercises and curriculum coverage
    Workbooks {
        /// Workbook directory (default from config)
        dir: Option<PathBuf>,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `gradus config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a value by dotted key, e.g. `search.default_limit`
    Get {
        /// Dotted key
        key: String,
    },

    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value (bool, integer, float, or string)
        value: String,
    },

    /// Write a default config file
    Init {
        /// Target file (default: platform config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=value` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
