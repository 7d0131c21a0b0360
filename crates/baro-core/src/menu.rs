//! Menu projection of the registry.
//!
//! [`build_menu`] turns a sorted snapshot of entries into a widget-agnostic
//! tree. Whatever renders it (tray indicator, CLI) maps [`MenuAction`]s back
//! to dispatcher calls or registry reloads.

use crate::i18n::{MessageKey, Translator};
use crate::registry::PathEntry;
use std::fmt::Write as FmtWrite;

/// What activating an item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    OpenFolder(String),
    OpenTerminal(String),
    Settings,
    Refresh,
    Quit,
}

/// Icon shown next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Folder,
    Terminal,
    Settings,
    Refresh,
    Quit,
}

/// A clickable (or greyed out) menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub action: Option<MenuAction>,
    pub icon: Option<MenuIcon>,
    pub enabled: bool,
}

impl MenuItem {
    fn action(label: impl Into<String>, action: MenuAction, icon: MenuIcon) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            icon: Some(icon),
            enabled: true,
        }
    }

    fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
            icon: None,
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
    Submenu {
        label: String,
        icon: Option<MenuIcon>,
        items: Vec<MenuItem>,
    },
}

/// Top-level menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Number of entries that always close the menu.
    pub const TRAILING_LEN: usize = 4;

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Every item, depth-first, including submenu children.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().flat_map(|entry| {
            let items: &[MenuItem] = match entry {
                MenuEntry::Item(item) => std::slice::from_ref(item),
                MenuEntry::Submenu { items, .. } => items,
                MenuEntry::Separator => &[],
            };
            items
        })
    }

    /// The fixed Settings / Refresh / separator / Quit tail.
    pub fn trailing(&self) -> &[MenuEntry] {
        let start = self.entries.len().saturating_sub(Self::TRAILING_LEN);
        &self.entries[start..]
    }

    /// Plain-text rendering, one row per line, submenu children indented.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                MenuEntry::Item(item) => {
                    let _ = writeln!(out, "{}", item.label);
                }
                MenuEntry::Separator => {
                    let _ = writeln!(out, "────────");
                }
                MenuEntry::Submenu { label, items, .. } => {
                    let _ = writeln!(out, "{} ▸", label);
                    for item in items {
                        let _ = writeln!(out, "    {}", item.label);
                    }
                }
            }
        }
        out
    }
}

/// Build the menu for already-sorted entries.
///
/// With entries: one folder item per entry, then an "Open in Terminal"
/// submenu repeating them. Without: a single disabled placeholder. Either way
/// the menu ends with Settings, Refresh, a separator and Quit.
pub fn build_menu(paths: &[PathEntry], tr: &Translator) -> Menu {
    let mut entries = Vec::with_capacity(paths.len() + 8);

    if paths.is_empty() {
        entries.push(MenuEntry::Item(MenuItem::disabled(
            tr.get(MessageKey::MenuNoPaths),
        )));
        entries.push(MenuEntry::Separator);
    } else {
        for entry in paths {
            entries.push(MenuEntry::Item(MenuItem::action(
                entry.alias.clone(),
                MenuAction::OpenFolder(entry.path.clone()),
                MenuIcon::Folder,
            )));
        }
        entries.push(MenuEntry::Separator);

        let terminal_items = paths
            .iter()
            .map(|entry| {
                MenuItem::action(
                    entry.alias.clone(),
                    MenuAction::OpenTerminal(entry.path.clone()),
                    MenuIcon::Terminal,
                )
            })
            .collect();
        entries.push(MenuEntry::Submenu {
            label: tr.get(MessageKey::MenuOpenInTerminal).to_string(),
            icon: Some(MenuIcon::Terminal),
            items: terminal_items,
        });
        entries.push(MenuEntry::Separator);
    }

    entries.push(MenuEntry::Item(MenuItem::action(
        tr.get(MessageKey::MenuSettings),
        MenuAction::Settings,
        MenuIcon::Settings,
    )));
    entries.push(MenuEntry::Item(MenuItem::action(
        tr.get(MessageKey::MenuRefresh),
        MenuAction::Refresh,
        MenuIcon::Refresh,
    )));
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::Item(MenuItem::action(
        tr.get(MessageKey::MenuQuit),
        MenuAction::Quit,
        MenuIcon::Quit,
    )));

    Menu { entries }
}
