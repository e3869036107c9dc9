//! Atomic file I/O for loading and saving documents

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;

use crate::error::Result;

/// Read a file's contents, or `None` when the path does not exist.
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write content atomically with file locking.
///
/// Uses write-to-temp-then-rename to prevent partial writes; the temp file
/// lives in the target's directory so the rename stays on one filesystem.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;

    temp_file.lock_exclusive()?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;
    FileExt::unlock(&temp_file)?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
