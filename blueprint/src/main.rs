// blueprint/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug blueprint validate ... to see every pass
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: VALIDATE ---
        Commands::Validate {
            document,
            format,
            resources,
        } => commands::validate::execute(&document, format, resources)?,

        // --- USE CASE: EXECUTION PLAN ---
        Commands::Plan { document } => commands::plan::execute(&document)?,

        // --- USE CASE: INSPECT ASSETS ---
        Commands::Inspect { document } => commands::inspect::execute(&document)?,

        // --- USE CASE: CANONICAL FORM ---
        Commands::Fmt { document, write } => commands::fmt::execute(&document, write)?,
    }

    Ok(())
}
