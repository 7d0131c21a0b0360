//! Opening registered paths in external programs.
//!
//! - `command` - [`LaunchCommand`] and the [`Spawner`] seam
//! - `terminal` - [`TerminalKind`] detection and working-directory flags
//!
//! The [`Dispatcher`] only decides *what* to run. Spawning goes through a
//! [`Spawner`] so tests can record launches instead of starting programs.

mod command;
mod terminal;

pub use command::{LaunchCommand, Spawner, SystemSpawner};
pub use terminal::TerminalKind;

use crate::config::DispatchConfig;
use crate::error::{BaroError, LaunchTarget, Result};
use crate::platform::{file_uri, is_virtual_path};
use crate::registry::RegistryState;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Launches the file manager or terminal for a path.
#[derive(Debug, Clone)]
pub struct Dispatcher<S = SystemSpawner> {
    file_manager: String,
    terminal: String,
    spawner: S,
}

impl Dispatcher<SystemSpawner> {
    pub fn new(file_manager: impl Into<String>, terminal: impl Into<String>) -> Self {
        Self::with_spawner(file_manager, terminal, SystemSpawner)
    }

    /// Dispatcher using the commands currently configured in `state`.
    pub fn from_state(state: &RegistryState) -> Self {
        Self::new(state.file_manager.clone(), state.terminal.clone())
    }
}

impl<S: Spawner> Dispatcher<S> {
    pub fn with_spawner(
        file_manager: impl Into<String>,
        terminal: impl Into<String>,
        spawner: S,
    ) -> Self {
        Self {
            file_manager: file_manager.into(),
            terminal: terminal.into(),
            spawner,
        }
    }

    pub fn file_manager(&self) -> &str {
        &self.file_manager
    }

    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Open `path` in a file manager.
    ///
    /// Virtual-filesystem mounts bypass the configured file manager: each
    /// known file manager is tried in turn, skipping ones that are not
    /// installed, and `xdg-open file://<path>` is the last resort. Local
    /// paths must exist and go to the configured command.
    pub fn open_in_file_manager(&self, path: &str) -> Result<()> {
        if is_virtual_path(path) {
            return self.open_virtual(path);
        }

        ensure_exists(path)?;
        let command = configured(&self.file_manager, LaunchTarget::FileManager)?.arg(path);
        self.launch(&command, LaunchTarget::FileManager)?;
        info!("Opened {} with {}", path, command.program);
        Ok(())
    }

    /// Open a terminal whose working directory is `path`.
    pub fn open_in_terminal(&self, path: &str) -> Result<()> {
        if !is_virtual_path(path) {
            ensure_exists(path)?;
        }

        let command = self.terminal_command(path)?;
        self.launch(&command, LaunchTarget::Terminal)?;
        info!("Opened terminal {} in {}", command.program, path);
        Ok(())
    }

    /// The invocation used to open a terminal at `path`.
    pub fn terminal_command(&self, path: &str) -> Result<LaunchCommand> {
        let base = configured(&self.terminal, LaunchTarget::Terminal)?;

        match TerminalKind::detect(&base.program).working_dir_flag() {
            Some(flag) => Ok(base.arg(flag).arg(path)),
            None => Ok(LaunchCommand::new(DispatchConfig::SHELL)
                .arg("-c")
                .arg(self.terminal.trim())
                .current_dir(path)),
        }
    }

    fn open_virtual(&self, path: &str) -> Result<()> {
        for fm in DispatchConfig::VFS_FILE_MANAGERS {
            let command = LaunchCommand::new(*fm).arg(path);
            match self.spawner.spawn(&command) {
                Ok(()) => {
                    info!("Opened virtual path {} with {}", path, fm);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{} not installed, trying next file manager", fm);
                }
                Err(e) => return Err(launch_failed(LaunchTarget::FileManager, fm, &e)),
            }
        }

        warn!(
            "No file manager found for {}, falling back to {}",
            path,
            DispatchConfig::URI_OPENER
        );
        let command = LaunchCommand::new(DispatchConfig::URI_OPENER).arg(file_uri(path));
        self.launch(&command, LaunchTarget::FileManager)
    }

    fn launch(&self, command: &LaunchCommand, target: LaunchTarget) -> Result<()> {
        self.spawner
            .spawn(command)
            .map_err(|e| launch_failed(target, &command.program, &e))
    }
}

fn ensure_exists(path: &str) -> Result<()> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(BaroError::PathNotFound(path.to_string()))
    }
}

fn configured(command_line: &str, target: LaunchTarget) -> Result<LaunchCommand> {
    LaunchCommand::parse(command_line).ok_or_else(|| BaroError::LaunchFailed {
        target,
        program: String::new(),
        message: format!("no {} command configured", target.as_str()),
    })
}

fn launch_failed(target: LaunchTarget, program: &str, err: &std::io::Error) -> BaroError {
    BaroError::LaunchFailed {
        target,
        program: program.to_string(),
        message: err.to_string(),
    }
}
