//! Token sync and family synthesis commands
//!
//! Each command loads the scene snapshot, hands one command to the engine,
//! writes the snapshot back and prints the engine's notification.

use std::path::Path;

use colored::Colorize;
use tokens_core::{Command, CommandOutcome, SyncEngine};
use tokens_tree::TokenSource;

use super::CommandContext;
use crate::error::Result;
use crate::snapshot::{load_scene, save_scene};

/// Run the sync-tokens command
pub fn run_sync_tokens(ctx: &CommandContext, source: &Path) -> Result<()> {
    println!(
        "{} Syncing tokens from {}...",
        "=>".blue().bold(),
        source.display().to_string().cyan()
    );
    let source = TokenSource::load(source)?;
    execute(ctx, Command::SyncTokens(source))
}

/// Run the sync-family command
pub fn run_sync_family(ctx: &CommandContext, name: &str) -> Result<()> {
    println!("{} Building {}...", "=>".blue().bold(), name.cyan());
    execute(ctx, Command::SyncFamily(name.to_string()))
}

/// Run the sync-all command
pub fn run_sync_all(ctx: &CommandContext) -> Result<()> {
    println!("{} Building all families...", "=>".blue().bold());
    execute(ctx, Command::SyncAllFamilies)
}

fn execute(ctx: &CommandContext, command: Command) -> Result<()> {
    let engine = SyncEngine::with_builtins(ctx.load_config()?)?;
    let mut scene = load_scene(ctx.scene_path())?;

    let outcome = engine.run(&mut scene, command);

    save_scene(ctx.scene_path(), &scene)?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &CommandOutcome) {
    if outcome.success {
        println!("{} {}", "OK".green().bold(), outcome.message);
    } else {
        println!("{} {}", "FAILED".red().bold(), outcome.message);
    }
}
