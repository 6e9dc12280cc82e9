//! ddir CLI Binary
//!
//! Command-line interface for describing filesystem paths.

use clap::Parser;
use ddir::cli::{Cli, RunContext};
use ddir::config::DdirConfig;
use ddir::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();

    let config = match RunContext::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ddir::cli::map_error(&e, std::io::stderr().is_terminal()));
            process::exit(e.exit_code());
        }
    };
    let color = config.display.color && std::io::stderr().is_terminal();

    // Build logging config from CLI args and the settings file
    let logging_config = build_logging_config(&cli, &config);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("ddir starting");

    let context = match RunContext::new(config, &cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Error initializing ddir: {}", e);
            eprintln!("{}", ddir::cli::map_error(&e, color));
            process::exit(e.exit_code());
        }
    };

    match context.execute(&cli) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", ddir::cli::map_error(&e, color));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args and the settings file.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, config: &DdirConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }

    if logging.enabled && logging.output == "file" {
        if let Ok(path) =
            ddir::logging::resolve_log_file_path(cli.log_file.clone(), logging.file.clone())
        {
            logging.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
