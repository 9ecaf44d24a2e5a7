//! Token Sync CLI
//!
//! Runs the token sync pipeline against a scene kept in a JSON snapshot.

mod cli;
mod commands;
mod error;
mod snapshot;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::CommandContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    } else {
        tokens_core::logging::init_with_default("warn")
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    }

    let ctx = CommandContext::new(cli.config, cli.scene);
    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &CommandContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::SyncTokens { source } => commands::run_sync_tokens(ctx, &source),
        Commands::SyncFamily { name } => commands::run_sync_family(ctx, &name),
        Commands::SyncAll => commands::run_sync_all(ctx),
        Commands::Families => commands::run_families(ctx),
    }
}
