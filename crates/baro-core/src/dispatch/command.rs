//! Launch descriptions and the seam that turns them into processes.

use crate::platform;
use std::path::PathBuf;
use std::process::Command;

/// A program invocation, built before anything is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Split a configured command line such as `nautilus --new-window` into
    /// program and leading arguments. `None` for a blank string.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace();
        let program = words.next()?;
        Some(Self::new(program).args(words))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Starts external programs.
///
/// Implementations return as soon as the program is running (or failed to
/// start); an `ErrorKind::NotFound` error means the binary does not exist.
pub trait Spawner {
    fn spawn(&self, command: &LaunchCommand) -> std::io::Result<()>;
}

impl<S: Spawner + ?Sized> Spawner for &S {
    fn spawn(&self, command: &LaunchCommand) -> std::io::Result<()> {
        (**self).spawn(command)
    }
}

/// Spawns real, detached processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, command: &LaunchCommand) -> std::io::Result<()> {
        platform::spawn_detached(command.to_command())
    }
}
