//! Atomic file operations for safe JSON persistence.
//!
//! Implements atomic writes using:
//! 1. Write to a temp file next to the target, suffixed with the PID
//! 2. Flush and sync so the data reaches disk
//! 3. Optional backup of the previous file
//! 4. Atomic rename to the target path

use crate::error::{BaroError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};

/// Path of the backup kept beside `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("json.bak")
}

/// Path an unparseable file is moved to by [`quarantine`].
pub fn corrupt_path(path: &Path) -> PathBuf {
    path.with_extension("json.corrupt")
}

/// Move a file that failed to parse out of the way, so that later writes
/// (and their backups) cannot overwrite it.
///
/// Returns the new location, or `None` if there was nothing to move.
pub fn quarantine(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let target = corrupt_path(path);
    fs::rename(path, &target).map_err(|e| BaroError::Io {
        message: format!("Failed to move {} aside", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    Ok(Some(target))
}

/// Read and parse a JSON file.
///
/// Returns `None` if the file doesn't exist, or an error if reading or
/// parsing fails.
pub fn atomic_read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| BaroError::Io {
        message: format!("Failed to read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    let data: T = serde_json::from_str(&contents).map_err(|e| BaroError::Json {
        message: format!("Failed to parse {}: {}", path.display(), e),
        source: Some(e),
    })?;

    Ok(Some(data))
}

/// Write data to a JSON file atomically.
///
/// Creates missing parent directories. With `keep_backup`, an existing file
/// is copied to `<name>.json.bak` before being replaced.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T, keep_backup: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| BaroError::Io {
                message: format!("Failed to create directory {}", parent.display()),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }
    }

    let temp_path = path.with_extension(format!("json.{}.tmp", process::id()));

    let serialized = serde_json::to_string_pretty(data).map_err(|e| BaroError::Json {
        message: format!("Failed to serialize data: {}", e),
        source: Some(e),
    })?;

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| BaroError::Io {
                message: format!("Failed to create temp file {}", temp_path.display()),
                path: Some(temp_path.clone()),
                source: Some(e),
            })?;

        file.write_all(serialized.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.flush())
            .and_then(|_| file.sync_all())
            .map_err(|e| BaroError::Io {
                message: format!("Failed to write temp file {}", temp_path.display()),
                path: Some(temp_path.clone()),
                source: Some(e),
            })?;
    }

    if keep_backup && path.exists() {
        let backup = backup_path(path);
        if let Err(e) = fs::copy(path, &backup) {
            warn!("Failed to create backup {}: {}", backup.display(), e);
        } else {
            debug!("Created backup: {}", backup.display());
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(BaroError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    debug!("Atomically wrote {}", path.display());
    Ok(())
}
