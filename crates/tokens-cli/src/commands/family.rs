//! Family listing command

use colored::Colorize;
use tokens_core::FamilyCatalog;

use super::CommandContext;
use crate::error::Result;

/// Run the families command
///
/// Lists every known family with its variant count and axes. Families in
/// the configured sync-all sequence are marked.
pub fn run_families(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    let catalog = FamilyCatalog::with_builtins()?;

    println!("{}", "Component Families:".bold());
    for family in catalog.iter() {
        let axes: Vec<&str> = family.axes.iter().map(|a| a.name.as_str()).collect();
        let marker = if config.families.contains(&family.name) {
            "*".green()
        } else {
            " ".normal()
        };
        println!(
            "  {} {:<10} {:>4} variants  {}",
            marker,
            family.name.cyan(),
            family.combination_count(),
            axes.join(" x ").dimmed()
        );
    }
    println!();
    println!(
        "{} {}",
        "sync-all order:".dimmed(),
        config.families.join(", ")
    );
    Ok(())
}
