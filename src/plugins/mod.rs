//! Editing plugins and the chain that runs them.
//!
//! Plugins form an ordered chain. For every event the session calls the
//! first plugin with a [`Next`] continuation holding the rest of the chain.
//! A plugin either handles the event and returns [`Outcome::Handled`], which
//! stops propagation, or hands it on by returning whatever `next` returns.
//! Every hook defaults to handing on.
//!
//! ```text
//! KeyEvent ─▶ Newline ─next─▶ Clear ─next─▶ SelectionShortcuts ─next─▶ Clipboard ─next─▶ Deferred
//! ```

mod clear;
mod clipboard;
mod newline;
mod selection_shortcuts;

pub use clear::ClearPlugin;
pub use clipboard::{copied_text, ClipboardPlugin};
pub use newline::{indent_for, NewlinePlugin};
pub use selection_shortcuts::SelectionShortcutsPlugin;

use serde::{Deserialize, Serialize};

use crate::editor::Editor;
use crate::event::{ClipboardAction, ClipboardEvent, KeyEvent};

/// Result of offering an event to a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The event was consumed; stop propagation
    Handled,
    /// Nobody down the chain took the event
    Deferred,
}

impl Outcome {
    pub fn is_handled(self) -> bool {
        matches!(self, Outcome::Handled)
    }
}

/// An editing plugin. Every hook defaults to deferring to `next`.
pub trait Plugin {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn on_key_down(&self, event: &mut KeyEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        next.key_down(event, editor)
    }

    fn on_copy(&self, event: &mut ClipboardEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        next.clipboard(event, editor)
    }

    fn on_cut(&self, event: &mut ClipboardEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        next.clipboard(event, editor)
    }

    fn on_paste(&self, event: &mut ClipboardEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        next.clipboard(event, editor)
    }
}

/// Continuation over the plugins after the current one
#[derive(Clone, Copy)]
pub struct Next<'a> {
    rest: &'a [Box<dyn Plugin>],
}

impl<'a> Next<'a> {
    /// A continuation with nothing left; always defers
    pub fn end() -> Self {
        Self { rest: &[] }
    }

    /// Offer a key event to the remaining plugins
    pub fn key_down(self, event: &mut KeyEvent, editor: &mut Editor) -> Outcome {
        match self.rest.split_first() {
            Some((plugin, rest)) => {
                tracing::trace!(plugin = plugin.name(), "key_down");
                plugin.on_key_down(event, editor, Next { rest })
            }
            None => Outcome::Deferred,
        }
    }

    /// Offer a clipboard event to the remaining plugins
    pub fn clipboard(self, event: &mut ClipboardEvent, editor: &mut Editor) -> Outcome {
        let Some((plugin, rest)) = self.rest.split_first() else {
            return Outcome::Deferred;
        };
        let next = Next { rest };
        tracing::trace!(plugin = plugin.name(), action = ?event.action, "clipboard");
        match event.action {
            ClipboardAction::Copy => plugin.on_copy(event, editor, next),
            ClipboardAction::Cut => plugin.on_cut(event, editor, next),
            ClipboardAction::Paste => plugin.on_paste(event, editor, next),
        }
    }
}

/// Plugins that can be named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    Newline,
    Clear,
    SelectionShortcuts,
    Clipboard,
}

impl PluginKind {
    /// Order the query field registers its plugins in
    pub const DEFAULT_ORDER: [PluginKind; 4] = [
        PluginKind::Newline,
        PluginKind::Clear,
        PluginKind::SelectionShortcuts,
        PluginKind::Clipboard,
    ];

    pub fn build(self) -> Box<dyn Plugin> {
        match self {
            PluginKind::Newline => Box::new(NewlinePlugin),
            PluginKind::Clear => Box::new(ClearPlugin),
            PluginKind::SelectionShortcuts => Box::new(SelectionShortcutsPlugin),
            PluginKind::Clipboard => Box::new(ClipboardPlugin),
        }
    }
}

/// Ordered list of plugins
#[derive(Default)]
pub struct PluginChain {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from plugin kinds, in order. Duplicates are kept once.
    pub fn from_kinds(kinds: &[PluginKind]) -> Self {
        let mut chain = Self::new();
        let mut seen = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if seen.contains(&kind) {
                tracing::warn!("Plugin {:?} listed twice, ignoring duplicate", kind);
                continue;
            }
            seen.push(kind);
            chain.push(kind.build());
        }
        chain
    }

    /// All four plugins in their default order
    pub fn with_defaults() -> Self {
        Self::from_kinds(&PluginKind::DEFAULT_ORDER)
    }

    pub fn push(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    fn head(&self) -> Next<'_> {
        Next {
            rest: &self.plugins,
        }
    }

    pub fn key_down(&self, event: &mut KeyEvent, editor: &mut Editor) -> Outcome {
        self.head().key_down(event, editor)
    }

    pub fn clipboard(&self, event: &mut ClipboardEvent, editor: &mut Editor) -> Outcome {
        self.head().clipboard(event, editor)
    }
}

impl std::fmt::Debug for PluginChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::editable::EditorState;
    use crate::keymap::{KeyCode, Keystroke};

    /// Records its name, then either handles or defers
    struct Probe {
        name: &'static str,
        handles: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Plugin for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_key_down(&self, event: &mut KeyEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
            self.log.borrow_mut().push(self.name);
            if self.handles {
                Outcome::Handled
            } else {
                next.key_down(event, editor)
            }
        }
    }

    fn key() -> KeyEvent {
        KeyEvent::new(Keystroke::key(KeyCode::Enter), None)
    }

    #[test]
    fn test_chain_stops_at_first_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = PluginChain::new();
        for (name, handles) in [("a", false), ("b", true), ("c", true)] {
            chain.push(Box::new(Probe {
                name,
                handles,
                log: Rc::clone(&log),
            }));
        }

        let mut editor = Editor::new(EditorState::from_text(""));
        let outcome = chain.key_down(&mut key(), &mut editor);
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_exhausted_chain_defers() {
        let mut editor = Editor::new(EditorState::from_text(""));
        assert_eq!(PluginChain::new().key_down(&mut key(), &mut editor), Outcome::Deferred);
        assert_eq!(Next::end().key_down(&mut key(), &mut editor), Outcome::Deferred);
    }

    #[test]
    fn test_default_hooks_pass_through() {
        struct Silent;
        impl Plugin for Silent {
            fn name(&self) -> &'static str {
                "silent"
            }
        }

        let mut chain = PluginChain::new();
        chain.push(Box::new(Silent));
        let mut editor = Editor::new(EditorState::from_text("x"));
        let mut event = ClipboardEvent::paste(Some("y".into()));
        assert_eq!(chain.clipboard(&mut event, &mut editor), Outcome::Deferred);
        assert_eq!(editor.document().text(), "x");
    }

    #[test]
    fn test_from_kinds_drops_duplicates() {
        let chain = PluginChain::from_kinds(&[PluginKind::Clear, PluginKind::Clear, PluginKind::Newline]);
        assert_eq!(chain.names(), vec!["clear", "newline"]);
    }

    #[test]
    fn test_default_order() {
        let chain = PluginChain::with_defaults();
        assert_eq!(
            chain.names(),
            vec!["newline", "clear", "selection_shortcuts", "clipboard"]
        );
    }
}
