//! Error types for Baro.
//!
//! Nothing in this taxonomy is fatal to the process. Load failures are
//! recovered inside the registry, save failures are logged, and dispatch
//! failures are rendered into a localized message for the user.

use crate::i18n::{MessageKey, Translator};
use std::path::PathBuf;
use thiserror::Error;

/// Which external program a launch was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    FileManager,
    Terminal,
}

impl LaunchTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchTarget::FileManager => "file manager",
            LaunchTarget::Terminal => "terminal",
        }
    }
}

/// Main error type for the Baro library.
#[derive(Debug, Error)]
pub enum BaroError {
    // Persisted settings
    #[error("Failed to load settings from {}: {message}", .path.display())]
    ConfigLoad { path: PathBuf, message: String },

    #[error("Failed to save settings to {}: {message}", .path.display())]
    ConfigSave { path: PathBuf, message: String },

    // Dispatch errors
    #[error("Path does not exist: {0}")]
    PathNotFound(String),

    #[error("Failed to launch {} '{program}': {message}", .target.as_str())]
    LaunchFailed {
        target: LaunchTarget,
        program: String,
        message: String,
    },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Baro operations.
pub type Result<T> = std::result::Result<T, BaroError>;

impl From<std::io::Error> for BaroError {
    fn from(err: std::io::Error) -> Self {
        BaroError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for BaroError {
    fn from(err: serde_json::Error) -> Self {
        BaroError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl BaroError {
    /// Whether this error should be shown to the user rather than only logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            BaroError::PathNotFound(_) | BaroError::LaunchFailed { .. }
        )
    }

    /// Render the message shown to the user, in the translator's language.
    pub fn user_message(&self, tr: &Translator) -> String {
        match self {
            BaroError::PathNotFound(path) => tr.format(MessageKey::MsgFolderNotFound, &[path]),
            BaroError::LaunchFailed {
                target: LaunchTarget::FileManager,
                message,
                ..
            } => tr.format(MessageKey::MsgCannotOpenFolder, &[message]),
            BaroError::LaunchFailed {
                target: LaunchTarget::Terminal,
                message,
                ..
            } => tr.format(MessageKey::MsgCannotOpenTerminal, &[message]),
            other => other.to_string(),
        }
    }
}
