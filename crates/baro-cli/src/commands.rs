//! Command handlers.
//!
//! Each handler works on the in-memory registry, persists after a successful
//! mutation and prints a localized confirmation. Rejections become errors
//! carrying the localized message, so `main` exits non-zero.

use crate::{Command, SortArg};
use anyhow::{bail, Result};
use baro_core::{
    build_menu, BaroError, Dispatcher, Language, MessageKey, MoveDirection, PathRegistry,
    SortMode, Spawner, Translator,
};
use std::io::Write;
use tracing::debug;

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Custom => SortMode::Custom,
            SortArg::Name => SortMode::Name,
        }
    }
}

/// Run one command against `registry`, launching through `spawner`.
pub fn execute<S: Spawner>(
    command: Command,
    registry: &mut PathRegistry,
    spawner: &S,
    out: &mut dyn Write,
) -> Result<()> {
    let tr = Translator::new(registry.language());
    debug!("Executing {:?}", command);

    match command {
        Command::List => {
            let paths = registry.sorted_paths();
            if paths.is_empty() {
                writeln!(out, "{}", tr.get(MessageKey::MenuNoPaths))?;
            }
            for entry in paths {
                writeln!(out, "{}\t{}", entry.alias, entry.path)?;
            }
        }

        Command::Add { alias, path } => {
            if !registry.add_path(&alias, &path) {
                bail!(tr.format(MessageKey::MsgAliasRejected, &[alias.trim()]));
            }
            registry.persist()?;
            writeln!(out, "{}", tr.format(MessageKey::MsgPathAdded, &[alias.trim()]))?;
        }

        Command::Edit {
            alias,
            new_alias,
            new_path,
        } => {
            let Some(existing) = registry.get(&alias).cloned() else {
                bail!(tr.format(MessageKey::MsgAliasNotFound, &[&alias]));
            };
            let new_alias = new_alias.unwrap_or(existing.alias);
            let new_path = new_path.unwrap_or(existing.path);

            if !registry.update_path(&alias, &new_alias, &new_path) {
                bail!(tr.format(MessageKey::MsgAliasRejected, &[new_alias.trim()]));
            }
            registry.persist()?;
            writeln!(
                out,
                "{}",
                tr.format(MessageKey::MsgPathUpdated, &[new_alias.trim()])
            )?;
        }

        Command::Remove { alias } => {
            if !registry.remove_path(&alias) {
                bail!(tr.format(MessageKey::MsgAliasNotFound, &[&alias]));
            }
            registry.persist()?;
            writeln!(out, "{}", tr.format(MessageKey::MsgPathRemoved, &[&alias]))?;
        }

        Command::Move { alias, direction } => {
            if registry.get(&alias).is_none() {
                bail!(tr.format(MessageKey::MsgAliasNotFound, &[&alias]));
            }
            if !registry.move_path(&alias, direction) {
                bail!(tr.format(MessageKey::MsgCannotMove, &[&alias]));
            }
            registry.persist()?;
            writeln!(out, "{}", tr.format(MessageKey::MsgPathMoved, &[&alias]))?;
        }

        Command::Sort { mode } => {
            registry.set_sort_mode(mode.into());
            registry.persist()?;
            writeln!(out, "{}", tr.get(MessageKey::MsgSettingsSaved))?;
        }

        Command::Language { code: None } => {
            let language = registry.language();
            writeln!(out, "{}\t{}", language.code(), language.native_name())?;
        }

        Command::Language { code: Some(code) } => {
            let Some(language) = Language::from_code(&code) else {
                bail!(BaroError::Validation {
                    field: "language".into(),
                    message: format!("unsupported language code '{}'", code),
                });
            };
            registry.set_language(language);
            registry.persist()?;
            // Confirm in the language just chosen
            let tr = Translator::new(language);
            writeln!(out, "{}", tr.get(MessageKey::MsgSettingsSaved))?;
        }

        Command::Languages => {
            let current = registry.language();
            for language in Language::ALL {
                let marker = if language == current { "*" } else { " " };
                writeln!(
                    out,
                    "{} {}\t{}",
                    marker,
                    language.code(),
                    language.native_name()
                )?;
            }
        }

        Command::Terminal { command: None } => {
            writeln!(out, "{}", registry.terminal())?;
        }

        Command::Terminal {
            command: Some(command),
        } => {
            if !registry.set_terminal(&command) {
                bail!(empty_command("terminal"));
            }
            registry.persist()?;
            writeln!(out, "{}", tr.get(MessageKey::MsgSettingsSaved))?;
        }

        Command::FileManager { command: None } => {
            writeln!(out, "{}", registry.file_manager())?;
        }

        Command::FileManager {
            command: Some(command),
        } => {
            if !registry.set_file_manager(&command) {
                bail!(empty_command("file_manager"));
            }
            registry.persist()?;
            writeln!(out, "{}", tr.get(MessageKey::MsgSettingsSaved))?;
        }

        Command::Open { alias } => {
            let dispatcher = dispatcher_for(registry, spawner);
            let path = lookup_path(registry, &alias, &tr)?;
            dispatcher
                .open_in_file_manager(&path)
                .map_err(|e| dispatch_error(e, &tr))?;
        }

        Command::Term { alias } => {
            let dispatcher = dispatcher_for(registry, spawner);
            let path = lookup_path(registry, &alias, &tr)?;
            dispatcher
                .open_in_terminal(&path)
                .map_err(|e| dispatch_error(e, &tr))?;
        }

        Command::Settings => print_settings(registry, &tr, out)?,

        Command::Menu => {
            write!(out, "{}", build_menu(&registry.sorted_paths(), &tr).render_text())?;
        }

        Command::Refresh => {
            registry.load();
            // The language may have changed on disk
            let tr = Translator::new(registry.language());
            write!(out, "{}", build_menu(&registry.sorted_paths(), &tr).render_text())?;
        }
    }

    Ok(())
}

/// Text version of the settings window.
fn print_settings(registry: &PathRegistry, tr: &Translator, out: &mut dyn Write) -> Result<()> {
    let sort = match registry.sort_mode() {
        SortMode::Custom => tr.get(MessageKey::SettingsSortCustom),
        SortMode::Name => tr.get(MessageKey::SettingsSortName),
    };

    writeln!(out, "{}", tr.get(MessageKey::SettingsTitle))?;
    writeln!(
        out,
        "{} {}",
        tr.get(MessageKey::SettingsLanguage),
        registry.language().native_name()
    )?;
    writeln!(out, "{} {}", tr.get(MessageKey::SettingsSort), sort)?;
    writeln!(
        out,
        "{} {}",
        tr.get(MessageKey::SettingsTerminal),
        registry.terminal()
    )?;
    writeln!(
        out,
        "{} {}",
        tr.get(MessageKey::SettingsFileManager),
        registry.file_manager()
    )?;

    writeln!(out)?;
    writeln!(out, "{}", tr.get(MessageKey::SettingsPaths))?;
    for entry in registry.sorted_paths() {
        writeln!(
            out,
            "  {} {}  {} {}",
            tr.get(MessageKey::PathAlias),
            entry.alias,
            tr.get(MessageKey::PathLocation),
            entry.path
        )?;
    }
    Ok(())
}

fn dispatcher_for<'a, S: Spawner>(registry: &PathRegistry, spawner: &'a S) -> Dispatcher<&'a S> {
    Dispatcher::with_spawner(registry.file_manager(), registry.terminal(), spawner)
}

fn lookup_path(registry: &PathRegistry, alias: &str, tr: &Translator) -> Result<String> {
    match registry.get(alias) {
        Some(entry) => Ok(entry.path.clone()),
        None => bail!(tr.format(MessageKey::MsgAliasNotFound, &[alias])),
    }
}

/// Missing folders and failed launches are reported in the UI language.
fn dispatch_error(err: BaroError, tr: &Translator) -> anyhow::Error {
    if err.is_user_visible() {
        anyhow::anyhow!(err.user_message(tr))
    } else {
        err.into()
    }
}

fn empty_command(field: &str) -> BaroError {
    BaroError::Validation {
        field: field.to_string(),
        message: "command must not be empty".to_string(),
    }
}
