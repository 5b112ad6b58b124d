//! Atomic file replacement for repaired sources.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Copy the target's permissions onto it (keeps executable scripts executable)
//! 3. Sync the file to disk (fsync)
//! 4. Rename it over the target
//!
//! The temporary file is named `.{filename}.tmp`; as a dotfile it is never
//! picked up by the directory walk if a crash leaves it behind.

use crate::error::{LicenseCheckError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content, path)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LicenseCheckError::write(path, e)
    })?;

    Ok(())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        LicenseCheckError::write(
            target,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid file path"),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8], target: &Path) -> Result<()> {
    let cleanup = |e: std::io::Error| {
        let _ = fs::remove_file(path);
        LicenseCheckError::write(path, e)
    };

    let mut file = File::create(path).map_err(|e| LicenseCheckError::write(path, e))?;
    file.write_all(content).map_err(cleanup)?;

    if let Ok(meta) = fs::metadata(target) {
        file.set_permissions(meta.permissions()).map_err(cleanup)?;
    }

    file.sync_all().map_err(cleanup)?;

    Ok(())
}
