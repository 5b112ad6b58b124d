//! Source reading and backup-preserving repair writes.

use super::atomic::atomic_write;
use crate::error::{LicenseCheckError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Read a source file's raw bytes. No encoding is assumed.
///
/// Unreadable files abort the run.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| LicenseCheckError::read(path, e))
}

/// The path a repair writes to.
///
/// A symlinked source is repaired in its target so the link survives the
/// atomic rename.
pub fn repair_target(path: &Path) -> Result<PathBuf> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| LicenseCheckError::read(path, e))?;
    if meta.file_type().is_symlink() {
        std::fs::canonicalize(path).map_err(|e| LicenseCheckError::read(path, e))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Remove a backup left by an earlier run. A missing backup is not an error.
pub fn remove_backup(backup_path: &Path) -> Result<()> {
    match std::fs::remove_file(backup_path) {
        Ok(()) => {
            tracing::debug!(path = %backup_path.display(), "removed stale backup");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LicenseCheckError::write(backup_path, e)),
    }
}

/// Writes successive repairs of one file.
///
/// The first write saves the file's original content to the backup path;
/// later writes only replace the file. One writer is created per file per
/// run; `path` is where repairs land, see [`repair_target`].
#[derive(Debug)]
pub struct RepairWriter {
    path: PathBuf,
    backup_path: PathBuf,
    original: Vec<u8>,
    backup_written: bool,
}

impl RepairWriter {
    pub fn new(
        path: impl Into<PathBuf>,
        backup_path: impl Into<PathBuf>,
        original: Vec<u8>,
    ) -> Self {
        Self {
            path: path.into(),
            backup_path: backup_path.into(),
            original,
            backup_written: false,
        }
    }

    /// Replace the file with `content`, backing up the original first if this
    /// is the first repair.
    pub fn write(&mut self, content: &[u8]) -> Result<()> {
        if !self.backup_written {
            std::fs::write(&self.backup_path, &self.original)
                .map_err(|e| LicenseCheckError::write(&self.backup_path, e))?;
            self.backup_written = true;
            tracing::debug!(path = %self.backup_path.display(), "wrote backup");
        }

        atomic_write(&self.path, content)
    }

    pub fn backup_written(&self) -> bool {
        self.backup_written
    }
}
