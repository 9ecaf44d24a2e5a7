//! Error types for tokens-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the CLI with a non-zero exit code
///
/// Sync failures are not among them: those are reported as the command's
/// notification.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from tokens-core
    #[error(transparent)]
    Core(#[from] tokens_core::Error),

    /// Error from tokens-tree
    #[error(transparent)]
    Tree(#[from] tokens_tree::Error),

    /// Error from tokens-scene
    #[error(transparent)]
    Scene(#[from] tokens_scene::Error),

    /// I/O error at a known path
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another process holds the snapshot lock
    #[error("Failed to lock {path}")]
    LockFailed { path: PathBuf },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
