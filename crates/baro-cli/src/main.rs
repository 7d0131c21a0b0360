//! Baro CLI - Command-line front end for the path registry.
//!
//! Every menu and settings-window action of the tray app is reachable from
//! here, so the registry can be managed (and folders opened) from scripts.

mod commands;

use anyhow::Result;
use baro_core::{MoveDirection, PathRegistry};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "baro")]
#[command(about = "Quick access to frequently used folders", version)]
struct Args {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered paths in menu order
    List,
    /// Register a new path
    Add { alias: String, path: String },
    /// Rename an entry or change its path
    Edit {
        alias: String,
        /// New alias
        #[arg(long = "alias", value_name = "ALIAS")]
        new_alias: Option<String>,
        /// New path
        #[arg(long = "path", value_name = "PATH")]
        new_path: Option<String>,
    },
    /// Remove an entry
    Remove { alias: String },
    /// Move an entry one step in the custom order
    Move {
        alias: String,
        /// `up`, `down`, `-1` or `+1`
        #[arg(value_parser = parse_direction, allow_hyphen_values = true)]
        direction: MoveDirection,
    },
    /// Set how the menu is sorted
    Sort { mode: SortArg },
    /// Show or set the UI language
    Language { code: Option<String> },
    /// List supported UI languages
    Languages,
    /// Show or set the terminal command
    Terminal { command: Option<String> },
    /// Show or set the file manager command
    FileManager { command: Option<String> },
    /// Open an entry in the file manager
    Open { alias: String },
    /// Open a terminal in an entry's directory
    Term { alias: String },
    /// Show every preference and the path list
    Settings,
    /// Print the tray menu
    Menu,
    /// Reload the settings file and print the rebuilt menu
    Refresh,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Custom,
    Name,
}

/// Accepts `up`/`down` or the offsets `-1`/`+1`.
fn parse_direction(value: &str) -> std::result::Result<MoveDirection, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "up" => Ok(MoveDirection::Up),
        "down" => Ok(MoveDirection::Down),
        other => other
            .parse::<i64>()
            .ok()
            .and_then(MoveDirection::from_offset)
            .ok_or_else(|| format!("expected up, down, -1 or +1, got '{}'", value)),
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut registry = match args.config {
        Some(path) => PathRegistry::open_at(path),
        None => PathRegistry::open_default()?,
    };
    debug!("Using settings file {}", registry.settings_path().display());

    let stdout = std::io::stdout();
    commands::execute(
        args.command,
        &mut registry,
        &baro_core::SystemSpawner,
        &mut stdout.lock(),
    )
}
