//! Sync configuration
//!
//! Loaded from a TOML file; every key has a default, so an empty file (or
//! no file at all) yields a working configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokens_tree::{DEFAULT_EXCLUDED_KEYS, FlattenOptions};

use crate::{Error, Result};

fn default_collection() -> String {
    "Design Tokens".to_string()
}

fn default_namespace() -> String {
    "tokens".to_string()
}

fn default_root_font_size() -> f64 {
    16.0
}

fn default_component_namespace() -> String {
    "Components".to_string()
}

fn default_excluded_keys() -> Vec<String> {
    DEFAULT_EXCLUDED_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_string_keywords() -> Vec<String> {
    vec!["font".to_string()]
}

fn default_families() -> Vec<String> {
    vec!["Button".to_string(), "Chip".to_string()]
}

/// Settings shared by token sync and family synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SyncConfig {
    /// Variable collection name
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Namespace token stripped from primitive paths
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Pixels per `rem`
    #[serde(default = "default_root_font_size")]
    pub root_font_size: f64,

    /// Prefix of variant-set names (`<namespace>/<Family>`)
    #[serde(default = "default_component_namespace")]
    pub component_namespace: String,

    /// Top-level token keys skipped before flattening
    #[serde(default = "default_excluded_keys")]
    pub excluded_keys: Vec<String>,

    /// A string token is synced only when its path contains one of these
    #[serde(default = "default_string_keywords")]
    pub string_keywords: Vec<String>,

    /// Families run by "sync all", in order
    #[serde(default = "default_families")]
    pub families: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            namespace: default_namespace(),
            root_font_size: default_root_font_size(),
            component_namespace: default_component_namespace(),
            excluded_keys: default_excluded_keys(),
            string_keywords: default_string_keywords(),
            families: default_families(),
        }
    }
}

impl SyncConfig {
    /// Parse a configuration from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use tokens_core::SyncConfig;
    ///
    /// let config = SyncConfig::parse(r#"
    /// collection = "Brand"
    /// families = ["Chip"]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.collection, "Brand");
    /// assert_eq!(config.namespace, "tokens");
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a configuration file, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Flattener options derived from this configuration.
    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            root_font_size: self.root_font_size,
            excluded_keys: self.excluded_keys.clone(),
        }
    }
}
