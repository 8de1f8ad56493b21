// src/main.rs

use anyhow::Result;
use b64file::cli::Cli;
use b64file::config::ConfigBuilder;
use b64file::prompt::ask_for_input_path;
use b64file::run;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging. A valid RUST_LOG replaces the default filter entirely.
    let default_directive = if cfg!(debug_assertions) {
        "b64file=debug"
    } else {
        "b64file=info"
    };
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    log::info!(
        "Starting Base64 File Encoder/Decoder v{}...",
        env!("CARGO_PKG_VERSION")
    );
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let mut cli = Cli::parse();
    if cli.file.is_none() {
        match ask_for_input_path() {
            Ok(path) => cli.file = Some(path),
            Err(e) => exit_with_error(&e),
        }
    }

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };
    log::debug!("Configuration built successfully: {:?}", config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&config, &mut stdout) {
        exit_with_error(&e);
    }

    Ok(())
}

// --- Error Handling ---
fn exit_with_error(e: &b64file::Error) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
