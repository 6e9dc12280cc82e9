//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;
use owo_colors::OwoColorize;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError, color: bool) -> String {
    if color {
        format!("{}: {}", "Err".red(), e)
    } else {
        format!("Err: {}", e)
    }
}
