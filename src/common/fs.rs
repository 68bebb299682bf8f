//! Common file system operations with unified error handling

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{self, Result};

/// Create `dir` and all of its parents
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| error::fs::write_failed(dir.display().to_string(), e.to_string()))
}

/// Replace `path` with `content` atomically.
///
/// The content is written to a temporary file in the same directory and then
/// renamed over the target. Readers see either the old or the new file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_failed = |reason: String| error::fs::write_failed(path.display().to_string(), reason);
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    ensure_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;
    Ok(())
}

/// Write a new file, failing if `path` already exists.
///
/// Uses create-new semantics so an existing file is never truncated.
pub fn write_new(path: &Path, content: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => error::scaffold::file_exists(path.display().to_string()),
            _ => error::fs::write_failed(path.display().to_string(), e.to_string()),
        })?;
    file.write_all(content.as_bytes())
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}
