//! Configurable keyboard mapping
//!
//! Keystrokes are resolved to [`Command`]s before they reach the plugin
//! chain, so plugins match on intent rather than raw keys:
//!
//! ```text
//! Keystroke → Keymap::lookup_with_context() → Option<Command> → KeyEvent
//! ```
//!
//! Bindings are data: an embedded `keymap.yaml` provides the defaults and
//! further YAML files can rebind or unbind individual keystrokes.

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings, merge_file,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
