//! Error types for tokens-tree

use std::path::PathBuf;

/// Result type for tokens-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a token source
///
/// Flattening itself never fails: leaves that cannot be classified are
/// dropped, not reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} token source at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported token source format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Token source at {path} must have a mapping at its root")]
    InvalidRoot { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
