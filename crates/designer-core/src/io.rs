use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Readers never observe a half-written document. A symlinked `path` is
/// written through to its target, and an existing file keeps its permissions.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let resolved;
    let path = if path.is_symlink() {
        let target = std::fs::read_link(path)?;
        resolved = match path.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target,
        };
        resolved.as_path()
    } else {
        path
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write a file only if it is absent or zero-length. Returns true if written.
pub fn write_if_missing_or_empty(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() && std::fs::metadata(path)?.len() > 0 {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}
