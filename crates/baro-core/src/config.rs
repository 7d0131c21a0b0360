//! Centralized configuration for Baro.
//!
//! Constants for the settings file location, preference defaults and the
//! external programs the dispatcher knows about.

/// Settings file location and preference defaults.
pub struct PathsConfig;

impl PathsConfig {
    /// Directory under the platform config dir (`~/.config/baro` on Linux).
    pub const CONFIG_DIR_NAME: &'static str = "baro";
    pub const SETTINGS_FILENAME: &'static str = "settings.json";
    pub const DEFAULT_TERMINAL: &'static str = "gnome-terminal";
    pub const DEFAULT_FILE_MANAGER: &'static str = "xdg-open";
    /// Keep a `.bak` copy when overwriting the settings file.
    pub const KEEP_BACKUP: bool = true;
}

/// External programs and path conventions used when launching.
pub struct DispatchConfig;

impl DispatchConfig {
    /// Per-session mount root for GVFS (`/run/user/<uid>/gvfs/...`).
    pub const VFS_MOUNT_ROOT: &'static str = "/run/user/";
    pub const VFS_MARKER: &'static str = "/gvfs/";
    /// File managers tried in order for virtual-filesystem paths.
    pub const VFS_FILE_MANAGERS: &'static [&'static str] =
        &["nautilus", "nemo", "thunar", "dolphin", "pcmanfm"];
    /// Last resort for virtual-filesystem paths, given a `file://` URI.
    pub const URI_OPENER: &'static str = "xdg-open";
    /// Shell used for terminals without a known working-directory flag.
    pub const SHELL: &'static str = "sh";
}
