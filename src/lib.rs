//! queryline - editing behaviors for a single-field query editor
//!
//! A query field is a small block-structured document (one block per line)
//! with a selection. Keystrokes and clipboard events go through an ordered
//! chain of plugins, each of which either handles the event or hands it on:
//!
//! - [`plugins::NewlinePlugin`] carries indentation onto new lines
//! - [`plugins::ClearPlugin`] deletes to end of line on ctrl+k
//! - [`plugins::SelectionShortcutsPlugin`] selects the current line
//! - [`plugins::ClipboardPlugin`] copies, cuts and pastes multi-line text
//!
//! [`session::Session`] is the host that owns the state, resolves keys
//! through the [`keymap`], runs default actions and keeps undo history.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod editor;
pub mod event;
pub mod keymap;
pub mod plugins;
pub mod script;
pub mod session;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{Document, EditorState, Point, Selection};
pub use editor::Editor;
pub use plugins::{Outcome, Plugin, PluginChain};
pub use session::Session;
