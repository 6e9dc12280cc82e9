//! CLI route: single route table and run context. Dispatches to the store, the
//! resolver and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_added, format_entries_json, format_entries_text, format_lookup,
};
use crate::config::{ConfigLoader, DdirConfig};
use crate::error::ApiError;
use crate::path::PathNormalizer;
use crate::resolve::Resolver;
use crate::store::{DescriptionDocument, EntryKind, JsonDocument};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info};

/// Runtime context for CLI execution: settings, the description document and the
/// path normalizer bound to the working directory.
pub struct RunContext {
    config: DdirConfig,
    document: JsonDocument,
    normalizer: PathNormalizer,
    color: bool,
}

impl RunContext {
    /// Load settings from `config_path`, or from the default locations.
    pub fn load_config(config_path: Option<&Path>) -> Result<DdirConfig, ApiError> {
        match config_path {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(),
        }
    }

    /// Build the context from loaded settings plus per-invocation CLI overrides.
    pub fn new(mut config: DdirConfig, cli: &Cli) -> Result<Self, ApiError> {
        if let Some(ref store) = cli.store {
            config.store.document = Some(store.clone());
        }
        if let Some(display) = cli.display {
            config.display.path = display;
        }

        let document_path = config.store.document_path()?;
        debug!(document = %document_path.display(), "Using description document");
        let document = JsonDocument::new(document_path).with_pretty(config.store.pretty);

        let normalizer = PathNormalizer::from_current_dir()?
            .with_symlink_resolution(config.store.resolve_symlinks);

        let color = config.display.color && std::io::stdout().is_terminal();

        Ok(Self {
            config,
            document,
            normalizer,
            color,
        })
    }

    /// Replace the normalizer (e.g. to resolve against another directory).
    pub fn with_normalizer(mut self, normalizer: PathNormalizer) -> Self {
        self.normalizer = normalizer.with_symlink_resolution(self.config.store.resolve_symlinks);
        self
    }

    /// Execute a CLI invocation via the single route table.
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        let command = cli.command.as_ref();
        info!(command = command_name(command), "Executing command");

        match (command, cli.path.as_deref()) {
            (None, path) => self.describe(path.unwrap_or(".")),
            (Some(_), Some(path)) => Err(ApiError::Argument(format!(
                "unexpected path '{}' before subcommand",
                path
            ))),
            (Some(Commands::Add { path, description }), None) => {
                self.store_entry(path, description, EntryKind::Direct)
            }
            (Some(Commands::Pattern { path, description }), None) => {
                self.store_entry(path, description, EntryKind::Pattern)
            }
            (Some(Commands::List { format }), None) => self.list(format),
        }
    }

    fn describe(&self, input: &str) -> Result<String, ApiError> {
        let store = self.document.load()?;
        let lookup =
            Resolver::new(&store).lookup(&self.normalizer, input, self.config.display.path)?;
        if !lookup.resolution.is_found() {
            info!(path = %lookup.path, "No description found");
        }
        Ok(format_lookup(&lookup, self.color))
    }

    /// Normalize and load before mutating so a bad path or a corrupt document
    /// leaves the file untouched.
    fn store_entry(
        &self,
        input: &str,
        description: &str,
        kind: EntryKind,
    ) -> Result<String, ApiError> {
        if description.trim().is_empty() {
            return Err(ApiError::Argument("description cannot be empty".to_string()));
        }

        let path = self.normalizer.normalize(input)?;
        let mut store = self.document.load()?;
        let previous = store.set(&path, description, kind);
        self.document.save(&store)?;

        info!(
            path = %path,
            kind = %kind,
            replaced = previous.is_some(),
            "Stored description"
        );
        Ok(format_added(&path, kind, previous.is_some(), self.color))
    }

    fn list(&self, format: &str) -> Result<String, ApiError> {
        let store = self.document.load()?;
        let entries = store.entries();
        match format {
            "text" => Ok(format_entries_text(&entries)),
            "json" => format_entries_json(&entries),
            other => Err(ApiError::Argument(format!(
                "invalid format '{}' (must be 'text' or 'json')",
                other
            ))),
        }
    }
}
