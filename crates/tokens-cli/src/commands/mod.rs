//! Command implementations

mod family;
mod sync;

use std::path::{Path, PathBuf};

use tokens_core::SyncConfig;

use crate::error::Result;

pub use family::run_families;
pub use sync::{run_sync_all, run_sync_family, run_sync_tokens};

/// File locations shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config_path: PathBuf,
    pub scene_path: PathBuf,
}

impl CommandContext {
    pub fn new(config_path: impl Into<PathBuf>, scene_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            scene_path: scene_path.into(),
        }
    }

    pub fn scene_path(&self) -> &Path {
        &self.scene_path
    }

    pub fn load_config(&self) -> Result<SyncConfig> {
        Ok(SyncConfig::load_or_default(&self.config_path)?)
    }
}
