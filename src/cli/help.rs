//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name used in log events (e.g. "describe", "add").
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None => "describe",
        Some(Commands::Add { .. }) => "add",
        Some(Commands::Pattern { .. }) => "pattern",
        Some(Commands::List { .. }) => "list",
    }
}
