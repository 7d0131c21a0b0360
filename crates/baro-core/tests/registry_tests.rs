//! Integration tests for the registry, its settings file and the menu built
//! from it.
//!
//! Everything runs against a settings file in a temp directory.

use baro_core::registry::atomic::{backup_path, corrupt_path};
use baro_core::{
    build_menu, Language, MenuAction, MenuEntry, MoveDirection, PathEntry, PathRegistry,
    SortMode, Translator,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp dir and the settings path inside it.
fn create_test_env() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = temp_dir.path().join("baro").join("settings.json");
    (temp_dir, settings)
}

fn write_settings(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_settings(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn aliases(paths: &[PathEntry]) -> Vec<&str> {
    paths.iter().map(|p| p.alias.as_str()).collect()
}

fn assert_invariants(registry: &PathRegistry) {
    let unique: HashSet<&str> = registry.paths().iter().map(|p| p.alias.as_str()).collect();
    assert_eq!(unique.len(), registry.len(), "aliases must be unique");

    let orders: Vec<i64> = registry.paths().iter().map(|p| p.order).collect();
    let expected: Vec<i64> = (0..registry.len() as i64).collect();
    assert_eq!(orders, expected, "orders must be contiguous from zero");
}

// ========================================
// Persistence
// ========================================

#[test]
fn test_missing_file_writes_defaults() {
    let (_temp_dir, settings) = create_test_env();

    let registry = PathRegistry::open_at(&settings);
    assert!(registry.is_empty());
    assert!(settings.exists());

    let json = read_settings(&settings);
    assert_eq!(
        json,
        json!({
            "language": "en",
            "sort_mode": "custom",
            "terminal": "gnome-terminal",
            "file_manager": "xdg-open",
            "paths": []
        })
    );
}

#[test]
fn test_save_load_round_trip_keeps_unknown_keys() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({
            "language": "es",
            "sort_mode": "name",
            "terminal": "kitty",
            "file_manager": "nemo",
            "paths": [
                {"alias": "Docs", "path": "/home/u/Docs", "order": 0},
                {"alias": "NAS", "path": "/run/user/1000/gvfs/smb-share:server=nas,share=x", "order": 1}
            ],
            "autostart": true,
            "window": {"x": 10, "y": 20}
        }),
    );

    let registry = PathRegistry::open_at(&settings);
    assert!(registry.save());

    let reloaded = PathRegistry::open_at(&settings);
    assert_eq!(reloaded.state(), registry.state());
    assert_eq!(reloaded.language(), Language::Es);
    assert_eq!(reloaded.sort_mode(), SortMode::Name);
    assert_eq!(reloaded.terminal(), "kitty");
    assert_eq!(reloaded.file_manager(), "nemo");

    let json = read_settings(&settings);
    assert_eq!(json["autostart"], true);
    assert_eq!(json["window"], json!({"x": 10, "y": 20}));
}

#[test]
fn test_missing_keys_are_backfilled_on_load() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({"paths": [{"alias": "Docs", "path": "/home/u/Docs"}]}),
    );

    let registry = PathRegistry::open_at(&settings);
    assert_eq!(registry.language(), Language::En);
    assert_eq!(registry.sort_mode(), SortMode::Custom);
    assert_eq!(registry.terminal(), "gnome-terminal");
    assert_eq!(registry.file_manager(), "xdg-open");
    assert_eq!(registry.get("Docs").unwrap().order, 0);
}

#[test]
fn test_corrupt_file_falls_back_to_defaults_and_is_kept_aside() {
    let (_temp_dir, settings) = create_test_env();
    std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
    std::fs::write(&settings, "{ this is not json").unwrap();

    let mut registry = PathRegistry::open_at(&settings);
    assert!(registry.is_empty());
    assert_eq!(registry.terminal(), "gnome-terminal");
    assert_eq!(read_settings(&settings)["paths"], json!([]));

    // Later saves rotate `.bak` but must not touch the quarantined copy
    assert!(registry.add_path("Docs", "/tmp"));
    registry.persist().unwrap();
    assert!(registry.add_path("Music", "/home/u/Music"));
    registry.persist().unwrap();

    let kept = std::fs::read_to_string(corrupt_path(&settings)).unwrap();
    assert_eq!(kept, "{ this is not json");
    assert_eq!(read_settings(&backup_path(&settings))["paths"][0]["alias"], "Docs");
    assert_eq!(PathRegistry::open_at(&settings).len(), 2);
}

#[test]
fn test_wrong_typed_preference_keeps_paths() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({
            "terminal": null,
            "sort_mode": 3,
            "paths": [
                {"alias": "Docs", "path": "/home/u/Docs", "order": 0},
                {"alias": "Music", "path": "/home/u/Music", "order": 1}
            ]
        }),
    );

    let registry = PathRegistry::open_at(&settings);
    assert_eq!(aliases(registry.paths()), vec!["Docs", "Music"]);
    assert_eq!(registry.terminal(), "gnome-terminal");
    assert_eq!(registry.sort_mode(), SortMode::Custom);
    assert!(!corrupt_path(&settings).exists());
}

#[test]
fn test_entry_missing_path_is_dropped_alone() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({
            "paths": [
                {"alias": "Docs", "path": "/home/u/Docs", "order": 0},
                {"alias": "Broken", "order": 1},
                {"alias": "Music", "path": "/home/u/Music", "order": 2}
            ]
        }),
    );

    let mut registry = PathRegistry::open_at(&settings);
    assert_eq!(aliases(registry.paths()), vec!["Docs", "Music"]);
    assert_invariants(&registry);

    registry.persist().unwrap();
    let json = read_settings(&settings);
    assert_eq!(json["paths"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(&settings, &json!({"language": "tlh", "sort_mode": "random"}));

    let registry = PathRegistry::open_at(&settings);
    assert_eq!(registry.language(), Language::En);
    assert_eq!(registry.sort_mode(), SortMode::Custom);
}

#[test]
fn test_hand_edited_orders_are_normalized() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({
            "paths": [
                {"alias": "C", "path": "/c", "order": 30},
                {"alias": "A", "path": "/a", "order": 10},
                {"alias": "B", "path": "/b", "order": 10},
                {"alias": "A", "path": "/elsewhere", "order": 5},
                {"alias": "", "path": "/blank", "order": 0}
            ]
        }),
    );

    let registry = PathRegistry::open_at(&settings);
    assert_eq!(aliases(registry.paths()), vec!["A", "B", "C"]);
    assert_eq!(registry.get("A").unwrap().path, "/a");
    assert_invariants(&registry);
}

#[test]
fn test_reload_picks_up_external_changes() {
    let (_temp_dir, settings) = create_test_env();
    let mut registry = PathRegistry::open_at(&settings);

    let mut other = PathRegistry::open_at(&settings);
    other.add_path("Docs", "/home/u/Docs");
    other.set_language(Language::Zh);
    other.persist().unwrap();

    registry.load();
    assert_eq!(aliases(registry.paths()), vec!["Docs"]);
    assert_eq!(registry.language(), Language::Zh);
}

#[test]
fn test_persist_reports_unwritable_location() {
    let (temp_dir, _) = create_test_env();
    // A regular file where the settings directory should be
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let registry = PathRegistry::open_at(blocker.join("settings.json"));
    assert!(registry.persist().is_err());
    assert!(!registry.save());
}

// ========================================
// Mutations
// ========================================

#[test]
fn test_duplicate_add_leaves_list_unchanged() {
    let (_temp_dir, settings) = create_test_env();
    write_settings(
        &settings,
        &json!({"paths": [{"alias": "Docs", "path": "/home/u/Docs", "order": 0}]}),
    );

    let mut registry = PathRegistry::open_at(&settings);
    let before = registry.paths().to_vec();

    assert!(!registry.add_path("Docs", "/tmp"));
    assert_eq!(registry.paths(), before.as_slice());
}

#[test]
fn test_sequence_of_mutations_keeps_invariants() {
    let (_temp_dir, settings) = create_test_env();
    let mut registry = PathRegistry::open_at(&settings);

    let names = ["alpha", "Bravo", "charlie", "Delta", "echo", "alpha", "Bravo"];
    for (step, name) in names.iter().cycle().take(60).enumerate() {
        match step % 5 {
            0 | 1 => {
                registry.add_path(name, &format!("/data/{}", name));
            }
            2 => {
                registry.move_path(name, MoveDirection::Up);
            }
            3 => {
                registry.move_path(name, MoveDirection::Down);
            }
            _ => {
                if step % 3 == 0 {
                    registry.remove_path(name);
                }
            }
        }
        assert_invariants(&registry);
    }

    assert!(registry.save());
    let reloaded = PathRegistry::open_at(&settings);
    assert_eq!(reloaded.paths(), registry.paths());
}

#[test]
fn test_name_sort_is_case_insensitive_and_leaves_custom_order() {
    let (_temp_dir, settings) = create_test_env();
    let mut registry = PathRegistry::open_at(&settings);
    for alias in ["delta", "Alpha", "charlie", "Bravo"] {
        assert!(registry.add_path(alias, "/x"));
    }

    registry.set_sort_mode(SortMode::Name);
    assert_eq!(
        aliases(&registry.sorted_paths()),
        vec!["Alpha", "Bravo", "charlie", "delta"]
    );
    assert_eq!(
        aliases(registry.paths()),
        vec!["delta", "Alpha", "charlie", "Bravo"]
    );

    registry.set_sort_mode(SortMode::Custom);
    assert_eq!(
        aliases(&registry.sorted_paths()),
        vec!["delta", "Alpha", "charlie", "Bravo"]
    );
}

#[test]
fn test_set_paths_replaces_and_renumbers() {
    let (_temp_dir, settings) = create_test_env();
    let mut registry = PathRegistry::open_at(&settings);
    registry.add_path("Old", "/old");

    let replacement = vec![
        PathEntry::new("B", "/b").with_order(7),
        PathEntry::new("A", "/a").with_order(3),
    ];
    assert!(registry.set_paths(replacement));
    assert_eq!(aliases(registry.paths()), vec!["B", "A"]);
    assert_invariants(&registry);

    let duplicate = vec![PathEntry::new("X", "/x"), PathEntry::new("X", "/y")];
    assert!(!registry.set_paths(duplicate));
    assert_eq!(aliases(registry.paths()), vec!["B", "A"]);
}

// ========================================
// Menu projection
// ========================================

#[test]
fn test_empty_registry_menu() {
    let (_temp_dir, settings) = create_test_env();
    let registry = PathRegistry::open_at(&settings);

    assert!(registry.sorted_paths().is_empty());
    let menu = build_menu(&registry.sorted_paths(), &Translator::new(registry.language()));

    let disabled: Vec<_> = menu.items().filter(|item| !item.enabled).collect();
    assert_eq!(disabled.len(), 1);
    assert!(!menu
        .entries()
        .iter()
        .any(|entry| matches!(entry, MenuEntry::Submenu { .. })));
}

#[test]
fn test_menu_follows_sort_mode() {
    let (_temp_dir, settings) = create_test_env();
    let mut registry = PathRegistry::open_at(&settings);
    registry.add_path("zeta", "/z");
    registry.add_path("Alpha", "/a");
    registry.set_sort_mode(SortMode::Name);
    registry.set_language(Language::Ja);

    let tr = Translator::new(registry.language());
    let menu = build_menu(&registry.sorted_paths(), &tr);

    let folder_actions: Vec<&MenuAction> = menu
        .items()
        .filter_map(|item| item.action.as_ref())
        .filter(|action| matches!(action, MenuAction::OpenFolder(_)))
        .collect();
    assert_eq!(
        folder_actions,
        vec![
            &MenuAction::OpenFolder("/a".into()),
            &MenuAction::OpenFolder("/z".into())
        ]
    );

    match &menu.entries()[3] {
        MenuEntry::Submenu { label, items, .. } => {
            assert_eq!(label, "ターミナルで開く");
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].action, Some(MenuAction::OpenTerminal("/a".into())));
        }
        other => panic!("expected terminal submenu, got {:?}", other),
    }
}
