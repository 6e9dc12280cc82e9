//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the store and resolver.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_added, format_entries_json, format_entries_text, format_lookup, NOT_FOUND_MESSAGE,
};
pub use route::RunContext;
