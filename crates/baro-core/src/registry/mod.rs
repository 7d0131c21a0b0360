//! Persisted registry of path aliases and user preferences.
//!
//! - `types` - The settings document and its entries
//! - `atomic` - Crash-safe JSON reads and writes
//! - `store` - [`PathRegistry`], the single owner of the document

pub mod atomic;
mod store;
mod types;

pub use store::PathRegistry;
pub use types::{MoveDirection, PathEntry, RegistryState, SortMode};
