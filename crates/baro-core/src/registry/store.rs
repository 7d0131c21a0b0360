//! The path registry: ordered alias → path entries plus preferences.

use super::atomic::{atomic_read_json, atomic_write_json, quarantine};
use super::types::{MoveDirection, PathEntry, RegistryState, SortMode};
use crate::config::PathsConfig;
use crate::error::{BaroError, Result};
use crate::i18n::Language;
use crate::platform;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Owns the settings document and every mutation of it.
///
/// Mutations happen in memory and report rejection with `false`; nothing is
/// written until [`save`](Self::save) or [`persist`](Self::persist).
///
/// Invariants kept after every mutation:
/// - aliases are unique and non-empty, paths are non-empty
/// - `order` equals the entry's position, `0..n-1`
#[derive(Debug)]
pub struct PathRegistry {
    settings_path: PathBuf,
    state: RegistryState,
}

impl PathRegistry {
    /// Open the registry at the default per-user location and load it.
    pub fn open_default() -> Result<Self> {
        let path = platform::settings_path()?;
        Ok(Self::open_at(path))
    }

    /// Open the registry backed by a specific settings file and load it.
    pub fn open_at(settings_path: impl Into<PathBuf>) -> Self {
        let mut registry = Self {
            settings_path: settings_path.into(),
            state: RegistryState::default(),
        };
        registry.load();
        registry
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// (Re)read the settings file.
    ///
    /// A missing or unreadable file is replaced by the default state, which is
    /// written back immediately. An unreadable file is first moved to
    /// `settings.json.corrupt`; if that fails the file is left untouched and
    /// the defaults stay in memory only. Individual bad keys or entries are
    /// dropped without discarding the rest of the file.
    /// Never fails; this is also what the menu's Refresh action does.
    pub fn load(&mut self) -> &RegistryState {
        match self.read_state() {
            Ok(Some(state)) => {
                self.state = state;
                self.normalize_loaded();
                debug!(
                    "Loaded {} path(s) from {}",
                    self.state.paths.len(),
                    self.settings_path.display()
                );
            }
            Ok(None) => {
                info!(
                    "No settings at {}, writing defaults",
                    self.settings_path.display()
                );
                self.state = RegistryState::default();
                self.save();
            }
            Err(err) => {
                warn!("{}; falling back to defaults", err);
                self.state = RegistryState::default();
                match quarantine(&self.settings_path) {
                    Ok(moved) => {
                        if let Some(moved) = moved {
                            warn!("Kept unreadable settings as {}", moved.display());
                        }
                        self.save();
                    }
                    Err(e) => error!("{}; not overwriting settings", e),
                }
            }
        }
        &self.state
    }

    fn read_state(&self) -> Result<Option<RegistryState>> {
        atomic_read_json(&self.settings_path).map_err(|e| BaroError::ConfigLoad {
            path: self.settings_path.clone(),
            message: e.to_string(),
        })
    }

    /// Bring a hand-edited or older file in line with the invariants.
    fn normalize_loaded(&mut self) {
        let mut seen = HashSet::new();
        self.state.paths.retain(|entry| {
            let keep = is_valid(&entry.alias, &entry.path) && seen.insert(entry.alias.clone());
            if !keep {
                warn!("Dropping invalid or duplicate entry '{}'", entry.alias);
            }
            keep
        });

        // Stable, so equal ranks keep file order
        self.state.paths.sort_by_key(|entry| entry.order);
        self.renumber();
    }

    /// Write the full state to disk, reporting failure.
    pub fn persist(&self) -> Result<()> {
        atomic_write_json(&self.settings_path, &self.state, PathsConfig::KEEP_BACKUP).map_err(
            |e| BaroError::ConfigSave {
                path: self.settings_path.clone(),
                message: e.to_string(),
            },
        )
    }

    /// Write the full state to disk. Failure is logged, not propagated; the
    /// in-memory state stays usable either way.
    pub fn save(&self) -> bool {
        match self.persist() {
            Ok(()) => true,
            Err(err) => {
                error!("{}", err);
                false
            }
        }
    }

    // ========================================
    // Snapshots
    // ========================================

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Entries in stored (custom) order.
    pub fn paths(&self) -> &[PathEntry] {
        &self.state.paths
    }

    pub fn get(&self, alias: &str) -> Option<&PathEntry> {
        self.state.paths.iter().find(|entry| entry.alias == alias)
    }

    pub fn len(&self) -> usize {
        self.state.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.paths.is_empty()
    }

    /// Copy of the entries in display order for the current sort mode.
    ///
    /// `Name` sorting never touches the stored custom order.
    pub fn sorted_paths(&self) -> Vec<PathEntry> {
        let mut paths = self.state.paths.clone();
        match self.state.sort_mode {
            SortMode::Custom => paths.sort_by_key(|entry| entry.order),
            SortMode::Name => paths.sort_by_cached_key(|entry| entry.alias.to_lowercase()),
        }
        paths
    }

    // ========================================
    // Entry mutations
    // ========================================

    /// Append a new entry. Rejects blank input and aliases already in use.
    pub fn add_path(&mut self, alias: &str, path: &str) -> bool {
        let (alias, path) = (alias.trim(), path.trim());
        if !is_valid(alias, path) {
            debug!("Rejected add: empty alias or path");
            return false;
        }
        if self.position(alias).is_some() {
            debug!("Rejected add: alias '{}' already exists", alias);
            return false;
        }

        let order = self.state.paths.len() as i64;
        self.state
            .paths
            .push(PathEntry::new(alias, path).with_order(order));
        debug!("Added '{}' -> {}", alias, path);
        true
    }

    /// Rename and/or repoint the entry called `old_alias`, keeping its rank.
    ///
    /// Rejects blank input and a new alias that belongs to another entry.
    pub fn update_path(&mut self, old_alias: &str, new_alias: &str, new_path: &str) -> bool {
        let Some(index) = self.position(old_alias) else {
            debug!("Rejected update: no entry '{}'", old_alias);
            return false;
        };
        let (new_alias, new_path) = (new_alias.trim(), new_path.trim());
        if !is_valid(new_alias, new_path) {
            debug!("Rejected update of '{}': empty alias or path", old_alias);
            return false;
        }
        if matches!(self.position(new_alias), Some(other) if other != index) {
            debug!(
                "Rejected update of '{}': alias '{}' already exists",
                old_alias, new_alias
            );
            return false;
        }

        let entry = &mut self.state.paths[index];
        entry.alias = new_alias.to_string();
        entry.path = new_path.to_string();
        debug!("Updated '{}' -> '{}' ({})", old_alias, new_alias, new_path);
        true
    }

    pub fn remove_path(&mut self, alias: &str) -> bool {
        let Some(index) = self.position(alias) else {
            return false;
        };
        self.state.paths.remove(index);
        self.renumber();
        debug!("Removed '{}'", alias);
        true
    }

    /// Swap the entry with its neighbour in custom order.
    ///
    /// Returns false when the alias is unknown or the entry is already at the
    /// edge. Works on the stored order whatever the sort mode; under `Name`
    /// the visible menu does not change.
    pub fn move_path(&mut self, alias: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.position(alias) else {
            return false;
        };
        let Some(target) = index.checked_add_signed(direction.offset()) else {
            return false;
        };
        if target >= self.state.paths.len() {
            return false;
        }

        self.state.paths.swap(index, target);
        self.renumber();
        debug!("Moved '{}' from {} to {}", alias, index, target);
        true
    }

    /// Replace every entry, ranked by position in `paths`.
    ///
    /// The list is rejected as a whole if any entry is blank or an alias
    /// repeats.
    pub fn set_paths(&mut self, paths: Vec<PathEntry>) -> bool {
        let valid = {
            let mut seen = HashSet::new();
            paths.iter().all(|entry| {
                is_valid(&entry.alias, &entry.path) && seen.insert(entry.alias.as_str())
            })
        };
        if !valid {
            debug!("Rejected replacement list: blank or duplicate entry");
            return false;
        }

        self.state.paths = paths;
        self.renumber();
        debug!("Replaced path list ({} entries)", self.state.paths.len());
        true
    }

    fn position(&self, alias: &str) -> Option<usize> {
        self.state.paths.iter().position(|entry| entry.alias == alias)
    }

    fn renumber(&mut self) {
        for (index, entry) in self.state.paths.iter_mut().enumerate() {
            entry.order = index as i64;
        }
    }

    // ========================================
    // Preferences
    // ========================================

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.state.sort_mode = sort_mode;
    }

    pub fn terminal(&self) -> &str {
        &self.state.terminal
    }

    /// Returns false for a blank command.
    pub fn set_terminal(&mut self, command: &str) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        self.state.terminal = command.to_string();
        true
    }

    pub fn file_manager(&self) -> &str {
        &self.state.file_manager
    }

    /// Returns false for a blank command.
    pub fn set_file_manager(&mut self, command: &str) -> bool {
        let command = command.trim();
        if command.is_empty() {
            return false;
        }
        self.state.file_manager = command.to_string();
        true
    }
}

fn is_valid(alias: &str, path: &str) -> bool {
    !alias.trim().is_empty() && !path.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry_with(temp_dir: &TempDir, aliases: &[&str]) -> PathRegistry {
        let mut registry = PathRegistry::open_at(temp_dir.path().join("settings.json"));
        for alias in aliases {
            assert!(registry.add_path(alias, &format!("/data/{}", alias)));
        }
        registry
    }

    fn aliases(registry: &PathRegistry) -> Vec<&str> {
        registry.paths().iter().map(|e| e.alias.as_str()).collect()
    }

    fn orders(registry: &PathRegistry) -> Vec<i64> {
        registry.paths().iter().map(|e| e.order).collect()
    }

    #[test]
    fn test_add_assigns_next_order() {
        let temp_dir = TempDir::new().unwrap();
        let registry = registry_with(&temp_dir, &["A", "B", "C"]);
        assert_eq!(orders(&registry), vec![0, 1, 2]);
        assert_eq!(registry.get("B").unwrap().path, "/data/B");
    }

    #[test]
    fn test_add_duplicate_alias_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &[]);
        assert!(registry.add_path("Docs", "/home/u/Docs"));

        assert!(!registry.add_path("Docs", "/tmp"));
        assert_eq!(registry.paths(), &[PathEntry::new("Docs", "/home/u/Docs")]);
    }

    #[test]
    fn test_add_blank_input_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &[]);
        assert!(!registry.add_path("", "/tmp"));
        assert!(!registry.add_path("Tmp", ""));
        assert!(!registry.add_path("   ", "/tmp"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B", "C"]);

        assert!(registry.update_path("B", "Bee", "/srv/bee"));
        assert_eq!(aliases(&registry), vec!["A", "Bee", "C"]);
        assert_eq!(registry.get("Bee").unwrap().order, 1);
        assert_eq!(registry.get("Bee").unwrap().path, "/srv/bee");
    }

    #[test]
    fn test_update_same_alias_new_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A"]);
        assert!(registry.update_path("A", "A", "/elsewhere"));
        assert_eq!(registry.get("A").unwrap().path, "/elsewhere");
    }

    #[test]
    fn test_update_rejections() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B"]);

        assert!(!registry.update_path("missing", "X", "/x"));
        assert!(!registry.update_path("A", "B", "/x"));
        assert!(!registry.update_path("A", "", "/x"));
        assert!(!registry.update_path("A", "A2", " "));
        assert_eq!(aliases(&registry), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_middle_renumbers() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B", "C"]);

        assert!(registry.remove_path("B"));
        assert_eq!(aliases(&registry), vec!["A", "C"]);
        assert_eq!(orders(&registry), vec![0, 1]);

        assert!(!registry.remove_path("B"));
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B"]);

        assert!(!registry.move_path("A", MoveDirection::Up));
        assert_eq!(aliases(&registry), vec!["A", "B"]);
        assert_eq!(orders(&registry), vec![0, 1]);
    }

    #[test]
    fn test_move_down_at_bottom_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B"]);
        assert!(!registry.move_path("B", MoveDirection::Down));
        assert!(!registry.move_path("nope", MoveDirection::Down));
        assert_eq!(aliases(&registry), vec!["A", "B"]);
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["A", "B", "C"]);

        assert!(registry.move_path("C", MoveDirection::Up));
        assert_eq!(aliases(&registry), vec!["A", "C", "B"]);
        assert!(registry.move_path("A", MoveDirection::Down));
        assert_eq!(aliases(&registry), vec!["C", "A", "B"]);
        assert_eq!(orders(&registry), vec![0, 1, 2]);
    }

    #[test]
    fn test_set_paths_renumbers_by_position() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["old"]);

        let replacement = vec![
            PathEntry::new("Z", "/z").with_order(7),
            PathEntry::new("Y", "/y").with_order(3),
        ];
        assert!(registry.set_paths(replacement));
        assert_eq!(aliases(&registry), vec!["Z", "Y"]);
        assert_eq!(orders(&registry), vec![0, 1]);
    }

    #[test]
    fn test_set_paths_rejects_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["keep"]);

        let replacement = vec![PathEntry::new("X", "/x"), PathEntry::new("X", "/y")];
        assert!(!registry.set_paths(replacement));
        assert_eq!(aliases(&registry), vec!["keep"]);
    }

    #[test]
    fn test_sorted_paths_by_name_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["banana", "Cherry", "apple"]);
        registry.set_sort_mode(SortMode::Name);

        let sorted: Vec<String> = registry.sorted_paths().into_iter().map(|e| e.alias).collect();
        assert_eq!(sorted, vec!["apple", "banana", "Cherry"]);

        // Stored order is untouched
        assert_eq!(aliases(&registry), vec!["banana", "Cherry", "apple"]);
        assert_eq!(orders(&registry), vec![0, 1, 2]);
    }

    #[test]
    fn test_sorted_paths_custom_follows_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &["b", "a", "c"]);
        assert!(registry.move_path("c", MoveDirection::Up));

        let sorted: Vec<String> = registry.sorted_paths().into_iter().map(|e| e.alias).collect();
        assert_eq!(sorted, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_empty_registry_sorts_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let registry = registry_with(&temp_dir, &[]);
        assert!(registry.sorted_paths().is_empty());
    }

    #[test]
    fn test_blank_commands_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_with(&temp_dir, &[]);
        assert!(!registry.set_terminal("  "));
        assert!(!registry.set_file_manager(""));
        assert_eq!(registry.terminal(), "gnome-terminal");
        assert_eq!(registry.file_manager(), "xdg-open");

        assert!(registry.set_terminal("konsole"));
        assert_eq!(registry.terminal(), "konsole");
    }
}
