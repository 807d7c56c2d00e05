// src/main.rs

use anyhow::Result;
use clap::Parser;
use repo_code_packager::cli::Cli;
use repo_code_packager::config::{load_config_file, load_required_config_file, ConfigBuilder};
use repo_code_packager::constants::DEFAULT_CONFIG_FILE_NAME;
use repo_code_packager::errors::Error;
use repo_code_packager::{run, OutputDestination};
use std::path::Path;

/// Reports a fatal error on stderr and exits with its status.
fn exit_with(e: Error) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(e.exit_code());
}

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "repo_code_packager=debug"
    } else {
        "repo_code_packager=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // --- Configuration ---
    let file_defaults = match cli.config_file.as_deref() {
        Some(explicit) => load_required_config_file(Path::new(explicit)).map(Some),
        None => load_config_file(Path::new(DEFAULT_CONFIG_FILE_NAME)),
    }
    .unwrap_or_else(|e| exit_with(e.into()));

    let config = ConfigBuilder::from_cli(cli)
        .file_defaults(file_defaults)
        .build()
        .unwrap_or_else(|e| exit_with(e));
    log::debug!("Configuration built successfully: {:?}", config);

    // --- Execution ---
    let context = run(&config).unwrap_or_else(|e| exit_with(e));

    if config.output.tokens {
        eprintln!("Estimated tokens: {}", context.estimated_tokens());
    }
    if let OutputDestination::File(path) = &config.output_destination {
        eprintln!("Context successfully written to {}", path.display());
    }

    Ok(())
}
