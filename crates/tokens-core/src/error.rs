//! Error types for tokens-core

use std::path::PathBuf;

use tokens_tree::PrimitiveKind;

/// Result type for tokens-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while syncing tokens or synthesizing families
///
/// The `Display` text of the first two variants is the exact notification
/// shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The variable collection does not exist yet
    #[error("Collection \"{name}\" not found. Run token sync first.")]
    MissingCollection { name: String },

    /// A variable a family binds to does not exist
    #[error("Missing variable \"{name}\" for {family}. Run token sync first.")]
    MissingVariable { family: String, name: String },

    /// A variable exists under this name with another type
    #[error("Variable {name} is a {existing} variable, cannot store a {requested}")]
    KindConflict {
        name: String,
        existing: PrimitiveKind,
        requested: PrimitiveKind,
    },

    #[error("Unknown component family: {name}")]
    UnknownFamily { name: String },

    #[error("Invalid family {family}: {message}")]
    InvalidFamily { family: String, message: String },

    #[error("Invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Token source error from tokens-tree
    #[error(transparent)]
    Tree(#[from] tokens_tree::Error),

    /// Adapter error from tokens-scene
    #[error(transparent)]
    Scene(#[from] tokens_scene::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_family(family: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFamily {
            family: family.into(),
            message: message.into(),
        }
    }
}
