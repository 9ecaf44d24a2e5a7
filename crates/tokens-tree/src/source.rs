//! Token source loading
//!
//! The token document is produced by a separate build step. It is loaded
//! once per run and handed to the pipeline as a value.

use std::fs;
use std::path::Path;

use crate::node::TokenNode;
use crate::{Error, Result};

/// A loaded token document.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSource {
    root: TokenNode,
}

impl TokenSource {
    /// Wrap an in-memory tree.
    pub fn new(root: TokenNode) -> Self {
        Self { root }
    }

    /// Load a token document from disk.
    ///
    /// Format is detected from the file extension:
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let root = Self::parse(&content, &extension).map_err(|failure| match failure {
            ParseFailure::Unsupported => Error::UnsupportedFormat {
                extension: extension.clone(),
            },
            ParseFailure::Invalid { format, message } => Error::Parse {
                path: path.to_path_buf(),
                format: format.into(),
                message,
            },
        })?;

        if !root.is_group() {
            return Err(Error::InvalidRoot {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { root })
    }

    fn parse(content: &str, extension: &str) -> std::result::Result<TokenNode, ParseFailure> {
        match extension {
            "json" => serde_json::from_str(content).map_err(|e| ParseFailure::invalid("JSON", e)),
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| ParseFailure::invalid("YAML", e))
            }
            "toml" => toml::from_str(content).map_err(|e| ParseFailure::invalid("TOML", e)),
            _ => Err(ParseFailure::Unsupported),
        }
    }

    /// The whole document.
    pub fn root(&self) -> &TokenNode {
        &self.root
    }

    /// The subtree holding the tokens of `namespace`.
    ///
    /// Documents may either wrap their tokens in a namespace key
    /// (`{ "tokens": { ... } }`) or put them at the root.
    pub fn namespace_tree(&self, namespace: &str) -> &TokenNode {
        match self.root.get(namespace) {
            Some(subtree) if subtree.is_group() => subtree,
            _ => &self.root,
        }
    }
}

enum ParseFailure {
    Unsupported,
    Invalid {
        format: &'static str,
        message: String,
    },
}

impl ParseFailure {
    fn invalid(format: &'static str, error: impl std::fmt::Display) -> Self {
        Self::Invalid {
            format,
            message: error.to_string(),
        }
    }
}
