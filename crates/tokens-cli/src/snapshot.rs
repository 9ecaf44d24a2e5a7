//! Scene snapshot persistence

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::Builder;
use tokens_scene::MemoryScene;
use tracing::debug;

use crate::error::{CliError, Result};

/// Read the scene snapshot, or start an empty scene if there is none yet.
pub fn load_scene(path: &Path) -> Result<MemoryScene> {
    if !path.exists() {
        debug!(path = %path.display(), "No scene snapshot, starting empty");
        return Ok(MemoryScene::new());
    }
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(MemoryScene::from_json(&content)?)
}

/// Write the scene snapshot atomically.
pub fn save_scene(path: &Path, scene: &MemoryScene) -> Result<()> {
    let content = scene.to_json()?;
    write_atomic(path, content.as_bytes())
}

/// Stage `content` beside `path` and swap it in with a single rename.
///
/// The staged file is held under an exclusive `fs2` lock while it is written
/// and flushed. On failure it is dropped and `path` is left untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| CliError::io(dir, e))?;

    let mut staged = Builder::new()
        .prefix(".scene-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| CliError::io(dir, e))?;
    let lock_failed = |_| CliError::LockFailed {
        path: path.to_path_buf(),
    };

    FileExt::lock_exclusive(staged.as_file()).map_err(lock_failed)?;
    staged
        .write_all(content)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| CliError::io(staged.path(), e))?;
    FileExt::unlock(staged.as_file()).map_err(lock_failed)?;

    staged
        .persist(path)
        .map_err(|e| CliError::io(path, e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote scene snapshot");
    Ok(())
}
