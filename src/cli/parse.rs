//! CLI parse: clap types for ddir. No behavior; definitions only.

use crate::resolve::DisplayPath;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ddir - attach descriptions to filesystem paths
///
/// Run with a path to print its description, or use a subcommand to add one.
#[derive(Parser)]
#[command(name = "ddir", version)]
#[command(about = "Attach human-readable descriptions to filesystem paths")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to describe (defaults to the current directory)
    pub path: Option<String>,

    /// Settings file path (overrides default settings loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Description document path (overrides settings)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Show the resolved path or the path as typed
    #[arg(long, global = true, value_enum)]
    pub display: Option<DisplayPath>,

    /// Enable verbose logging
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Describe a path itself
    Add {
        /// Path to describe
        path: String,
        /// Description text, shown verbatim
        #[arg(allow_hyphen_values = true)]
        description: String,
    },
    /// Describe every child of a directory; "*" stands for the child's name
    Pattern {
        /// Directory whose descendants the pattern describes
        path: String,
        /// Description template
        #[arg(allow_hyphen_values = true)]
        description: String,
    },
    /// List all stored descriptions and patterns
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
