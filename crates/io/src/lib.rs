use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Make sure `dir` exists as a directory, creating it when missing.
///
/// Creation is not recursive: if the parent is missing this fails.
/// Returns `true` when the directory was created by this call.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    if dir.exists() {
        bail!("{} exists but is not a directory", dir.display());
    }
    std::fs::create_dir(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    debug!(dir = %dir.display(), "created output directory");
    Ok(true)
}

/// Write `bytes` to `dir/name`, replacing any previous contents.
pub fn write_asset(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), len = bytes.len(), "wrote asset");
    Ok(path)
}

/// Like [`write_asset`] but leaves an existing file alone.
/// Returns `None` when the file was already present.
pub fn write_asset_if_absent(dir: &Path, name: &str, bytes: &[u8]) -> Result<Option<PathBuf>> {
    if dir.join(name).exists() {
        debug!(name, "asset already present; skipping");
        return Ok(None);
    }
    write_asset(dir, name, bytes).map(Some)
}
