//! Baro Core - Quick access to frequently used folders.
//!
//! This crate holds everything behind the Baro tray menu that does not need a
//! GUI toolkit: the persisted registry of path aliases, the menu projection
//! of that registry, the dispatcher that opens a path in a file manager or
//! terminal, and the message catalogue for the supported UI languages.
//!
//! # Example
//!
//! ```rust,ignore
//! use baro_core::{build_menu, Dispatcher, PathRegistry, Translator};
//!
//! fn main() -> baro_core::Result<()> {
//!     let mut registry = PathRegistry::open_default()?;
//!
//!     registry.add_path("Projects", "/home/me/projects");
//!     registry.persist()?;
//!
//!     let tr = Translator::new(registry.language());
//!     print!("{}", build_menu(&registry.sorted_paths(), &tr).render_text());
//!
//!     Dispatcher::from_state(registry.state()).open_in_terminal("/home/me/projects")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod platform;
pub mod registry;

// Re-export commonly used types
pub use config::{DispatchConfig, PathsConfig};
pub use dispatch::{Dispatcher, LaunchCommand, Spawner, SystemSpawner, TerminalKind};
pub use error::{BaroError, LaunchTarget, Result};
pub use i18n::{Language, MessageKey, Translator};
pub use menu::{build_menu, Menu, MenuAction, MenuEntry, MenuIcon, MenuItem};
pub use registry::{MoveDirection, PathEntry, PathRegistry, RegistryState, SortMode};
