//! Atomic file output
//!
//! The document is written to a temporary file next to the destination and
//! renamed over it once fully flushed. A failed write drops the temporary
//! file, so the destination is either the complete new icon or untouched.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IconError;

/// Write `contents` to `path`, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), IconError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| IconError::io(path, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IconError::io(path, e))?;
    debug!(tmp = %tmp.path().display(), "writing temporary file");

    tmp.write_all(contents.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| IconError::io(path, e))?;

    tmp.persist(path).map_err(|e| IconError::io(path, e.error))?;
    Ok(())
}
