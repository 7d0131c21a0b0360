//! Platform-specific path utilities.
//!
//! This module provides functions to get platform-specific paths for:
//! - The Baro configuration directory
//! - The persisted settings file
//! - Virtual-filesystem (GVFS) mount detection

use crate::config::{DispatchConfig, PathsConfig};
use crate::error::{BaroError, Result};
use std::path::PathBuf;

/// Get the Baro configuration directory.
///
/// # Platform Behavior
/// - **Linux**: `~/.config/baro` (XDG_CONFIG_HOME)
/// - **Windows**: `%APPDATA%\baro`
/// - **macOS**: `~/Library/Application Support/baro`
pub fn baro_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| BaroError::Config {
        message: "Could not determine platform config directory".to_string(),
    })?;
    Ok(config_dir.join(PathsConfig::CONFIG_DIR_NAME))
}

/// Get the path to the persisted settings document.
///
/// Returns `{baro_config_dir}/settings.json`.
pub fn settings_path() -> Result<PathBuf> {
    Ok(baro_config_dir()?.join(PathsConfig::SETTINGS_FILENAME))
}

/// Whether `path` lives under a per-session GVFS mount (sftp, smb, ...).
///
/// Such paths may not answer `exists()` reliably, so callers skip the
/// existence check for them.
pub fn is_virtual_path(path: &str) -> bool {
    path.starts_with(DispatchConfig::VFS_MOUNT_ROOT) && path.contains(DispatchConfig::VFS_MARKER)
}

/// `file://` URI form of an absolute path.
pub fn file_uri(path: &str) -> String {
    format!("file://{}", path)
}
