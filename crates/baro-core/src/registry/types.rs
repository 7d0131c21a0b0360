//! Persisted registry types.

use crate::config::PathsConfig;
use crate::i18n::Language;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// A registered path and the alias it is shown under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Display name, unique within the registry.
    pub alias: String,
    /// Filesystem location; may be a GVFS mount path.
    pub path: String,
    /// Rank in custom sort mode.
    #[serde(default)]
    pub order: i64,
}

impl PathEntry {
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
            order: 0,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

/// How the menu orders entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    /// By the stored `order` rank.
    #[default]
    Custom,
    /// By alias, case-insensitive.
    Name,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Custom => "custom",
            SortMode::Name => "name",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "custom" => Some(SortMode::Custom),
            "name" => Some(SortMode::Name),
            _ => None,
        }
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        SortMode::parse(&value).unwrap_or_default()
    }
}

impl From<SortMode> for String {
    fn from(value: SortMode) -> Self {
        value.as_str().to_string()
    }
}

/// Direction for [`PathRegistry::move_path`](super::PathRegistry::move_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    pub fn offset(&self) -> isize {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        }
    }

    /// `-1` is up, `+1` is down; anything else is not a move.
    pub fn from_offset(offset: i64) -> Option<Self> {
        match offset {
            -1 => Some(MoveDirection::Up),
            1 => Some(MoveDirection::Down),
            _ => None,
        }
    }
}

fn default_terminal() -> String {
    PathsConfig::DEFAULT_TERMINAL.to_string()
}

fn default_file_manager() -> String {
    PathsConfig::DEFAULT_FILE_MANAGER.to_string()
}

/// Full contents of the settings document.
///
/// Missing keys take their defaults on load. Keys this version does not
/// know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryState {
    pub language: Language,
    pub sort_mode: SortMode,
    pub terminal: String,
    pub file_manager: String,
    pub paths: Vec<PathEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            sort_mode: SortMode::default(),
            terminal: default_terminal(),
            file_manager: default_file_manager(),
            paths: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl RegistryState {
    /// Build the state from a parsed settings object, one key at a time.
    ///
    /// A key with the wrong type keeps its default and a path entry that does
    /// not parse is skipped, so one bad value never costs the rest of the file.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let mut state = RegistryState::default();

        if let Some(language) = take_key(&mut object, "language") {
            state.language = language;
        }
        if let Some(sort_mode) = take_key(&mut object, "sort_mode") {
            state.sort_mode = sort_mode;
        }
        if let Some(terminal) = take_command(&mut object, "terminal") {
            state.terminal = terminal;
        }
        if let Some(file_manager) = take_command(&mut object, "file_manager") {
            state.file_manager = file_manager;
        }

        match object.remove("paths") {
            Some(Value::Array(items)) => {
                state.paths = items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, item)| match serde_json::from_value(item) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            warn!("Skipping path entry {}: {}", index, e);
                            None
                        }
                    })
                    .collect();
            }
            Some(Value::Null) | None => {}
            Some(other) => warn!("Ignoring 'paths': expected a list, got {}", other),
        }

        state.extra = object;
        state
    }
}

impl<'de> Deserialize<'de> for RegistryState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(object) => Ok(RegistryState::from_object(object)),
            other => Err(de::Error::custom(format!(
                "settings must be a JSON object, got {}",
                other
            ))),
        }
    }
}

/// Remove `key` and parse it, or `None` (with a warning) when it has the
/// wrong shape.
fn take_key<T: DeserializeOwned>(object: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = object.remove(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring '{}': {}", key, e);
            None
        }
    }
}

fn take_command(object: &mut Map<String, Value>, key: &str) -> Option<String> {
    take_key::<String>(object, key).filter(|command| !command.trim().is_empty())
}
