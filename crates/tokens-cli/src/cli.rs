//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Token Sync - push design tokens into a scene and build component variants
#[derive(Parser, Debug)]
#[command(name = "tokensync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults apply when it does not exist)
    #[arg(long, global = true, env = "TOKENSYNC_CONFIG", default_value = "tokensync.toml")]
    pub config: PathBuf,

    /// Scene snapshot read before and written after every command
    #[arg(long, global = true, env = "TOKENSYNC_SCENE", default_value = "scene.json")]
    pub scene: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Flatten a token file and upsert its variables and color styles
    ///
    /// Accepts .json, .yaml/.yml and .toml sources.
    SyncTokens {
        /// Token source file
        source: PathBuf,
    },

    /// Rebuild one component family's variant set
    SyncFamily {
        /// Family name, e.g. Button
        name: String,
    },

    /// Rebuild every configured family, in order
    SyncAll,

    /// List the known component families
    Families,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_tokens_parses_source() {
        let cli = Cli::try_parse_from(["tokensync", "sync-tokens", "tokens.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::SyncTokens {
                source: PathBuf::from("tokens.json")
            }
        );
        assert_eq!(cli.scene, PathBuf::from("scene.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tokensync",
            "sync-family",
            "Chip",
            "--scene",
            "out/scene.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::SyncFamily {
                name: "Chip".into()
            }
        );
        assert_eq!(cli.scene, PathBuf::from("out/scene.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["tokensync"]).is_err());
    }
}
