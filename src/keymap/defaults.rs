//! Default keybindings and layered keymap loading
//!
//! The defaults ship embedded from keymap.yaml at the project root, with a
//! hardcoded fallback should the embedded file ever fail to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. keymap.yaml in the current directory
/// 3. User keymap at `~/.config/queryline/keymap.yaml`
///
/// Bindings with `command: Unbound` remove matching bindings from earlier layers.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let local = Path::new("keymap.yaml");
    if local.exists() {
        bindings = merge_file(bindings, local);
    }

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            bindings = merge_file(bindings, &user_path);
        }
    }

    bindings
}

/// Merge the bindings in `path` over `base`, keeping `base` if the file is bad
pub fn merge_file(base: Vec<Keybinding>, path: &Path) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(overrides) => {
            tracing::info!(
                "Merging keymap from {} ({} bindings)",
                path.display(),
                overrides.len()
            );
            merge_bindings(base, overrides)
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
            base
        }
    }
}

/// Merge override bindings into base bindings
///
/// - Same keystroke and conditions: the override replaces the base binding
/// - `Unbound`: every base binding on that keystroke is removed
/// - Otherwise the override is appended
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        let existing = result
            .iter()
            .position(|b| b.keystroke == binding.keystroke && b.when == binding.when);

        match existing {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let none = Modifiers::NONE;

    vec![
        // Plugins
        bind(KeyCode::Char('k'), Modifiers::CTRL, Command::DeleteToLineEnd),
        bind(KeyCode::Enter, none, Command::InsertNewline),
        bind(KeyCode::Char('l'), cmd, Command::SelectLine),
        // Clipboard
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('x'), cmd, Command::Cut),
        bind(KeyCode::Char('v'), cmd, Command::Paste),
        // Editing
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Char('a'), cmd, Command::SelectAll),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('z'), cmd_shift, Command::Redo),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::context::Condition;

    fn ctrl_k() -> Keystroke {
        Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL)
    }

    #[test]
    fn test_merge_replaces_same_keystroke() {
        let merged = merge_bindings(
            vec![Keybinding::new(ctrl_k(), Command::DeleteToLineEnd)],
            vec![Keybinding::new(ctrl_k(), Command::SelectLine)],
        );
        assert_eq!(merged, vec![Keybinding::new(ctrl_k(), Command::SelectLine)]);
    }

    #[test]
    fn test_merge_conditional_is_added_alongside() {
        let merged = merge_bindings(
            vec![Keybinding::new(ctrl_k(), Command::DeleteToLineEnd)],
            vec![Keybinding::new(ctrl_k(), Command::Cut).when_single(Condition::HasSelection)],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_unbound_removes_all_on_keystroke() {
        let merged = merge_bindings(
            vec![
                Keybinding::new(ctrl_k(), Command::DeleteToLineEnd),
                Keybinding::new(ctrl_k(), Command::Cut).when_single(Condition::HasSelection),
                bind(KeyCode::Enter, Modifiers::NONE, Command::InsertNewline),
            ],
            vec![Keybinding::new(ctrl_k(), Command::Unbound)],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].command, Command::InsertNewline);
    }

    #[test]
    fn test_embedded_matches_hardcoded() {
        let embedded = parse_keymap_yaml(get_default_keymap_yaml()).unwrap();
        let mut embedded: Vec<_> = embedded.iter().map(|b| (b.keystroke, b.command)).collect();
        let mut hardcoded: Vec<_> = default_bindings()
            .iter()
            .map(|b| (b.keystroke, b.command))
            .collect();
        let key = |pair: &(Keystroke, Command)| (pair.1.name(), pair.0.to_string());
        embedded.sort_by_key(key);
        hardcoded.sort_by_key(key);
        assert_eq!(embedded, hardcoded);
    }
}
