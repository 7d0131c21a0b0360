//! Platform abstraction layer for cross-platform compatibility.
//!
//! All `#[cfg]` blocks for OS-specific behavior should live in this module
//! rather than scattered throughout the codebase.
//!
//! - `paths` - Settings location and virtual-filesystem path detection
//! - `process` - Detached process spawning

pub mod paths;
pub mod process;

pub use paths::{baro_config_dir, file_uri, is_virtual_path, settings_path};
pub use process::spawn_detached;
