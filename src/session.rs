//! Editing session: the host side of the plugin chain
//!
//! A [`Session`] owns the editor state and everything around it. Every input
//! goes through the same steps:
//!
//! 1. Resolve keystrokes to commands via the keymap
//! 2. Offer the event to the plugin chain
//! 3. Run the host default action if no plugin handled it and none
//!    prevented the default
//! 4. Record an undo snapshot when the document changed
//!
//! Clipboard text is read before a paste is dispatched and written after a
//! copy or cut, so plugins never touch the system clipboard.

use tracing::{debug, span, warn, Level};

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::EditorConfig;
use crate::editable::{EditHistory, EditorState, Selection};
use crate::editor::Editor;
use crate::event::{ClipboardEvent, KeyEvent};
use crate::keymap::{default_bindings, Command, KeyCode, KeyContext, Keymap, Keystroke};
use crate::plugins::{Outcome, PluginChain};
use crate::tracing::SelectionSnapshot;

pub struct Session {
    editor: Editor,
    plugins: PluginChain,
    keymap: Keymap,
    clipboard: Box<dyn Clipboard>,
    history: EditHistory,
}

impl Session {
    /// Session with the default plugin chain and keymap and an in-memory
    /// clipboard
    pub fn new(state: EditorState) -> Self {
        Self {
            editor: Editor::new(state),
            plugins: PluginChain::with_defaults(),
            keymap: Keymap::with_bindings(default_bindings()),
            clipboard: Box::new(MemoryClipboard::default()),
            history: EditHistory::new(),
        }
    }

    /// Session configured from `config`, resolving keys with `keymap`
    pub fn from_config(state: EditorState, config: &EditorConfig, keymap: Keymap) -> Self {
        Self {
            editor: Editor::new(state),
            plugins: PluginChain::from_kinds(&config.plugins),
            keymap,
            clipboard: config.clipboard.open(),
            history: EditHistory::with_max_size(config.history_size),
        }
    }

    pub fn with_plugins(mut self, plugins: PluginChain) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn state(&self) -> &EditorState {
        self.editor.state()
    }

    pub fn plugins(&self) -> &PluginChain {
        &self.plugins
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn clipboard(&mut self) -> &mut dyn Clipboard {
        self.clipboard.as_mut()
    }

    /// Move the selection (clamped). Selection moves are not undo steps.
    ///
    /// # Panics
    ///
    /// Panics if either point references a block not in the document.
    pub fn select(&mut self, selection: Selection) {
        self.editor.select(selection);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch a keystroke
    ///
    /// Keystrokes bound to Copy, Cut or Paste become clipboard events.
    pub fn key_down(&mut self, keystroke: Keystroke) -> Outcome {
        let context = KeyContext::from_state(self.editor.state());
        let command = self.keymap.lookup_with_context(&keystroke, Some(&context));

        match command {
            Some(Command::Copy) => return self.copy(),
            Some(Command::Cut) => return self.cut(),
            Some(Command::Paste) => return self.paste(),
            _ => {}
        }

        let record = !matches!(command, Some(Command::Undo | Command::Redo));
        let name = match command {
            Some(command) => format!("key_down({keystroke} → {command})"),
            None => format!("key_down({keystroke})"),
        };

        self.traced(&name, record, |session| {
            let mut event = KeyEvent::new(keystroke, command);
            let outcome = session.plugins.key_down(&mut event, &mut session.editor);
            if !outcome.is_handled() && !event.default_prevented() {
                session.default_key_action(&event);
            }
            outcome
        })
    }

    /// Type `text` one keystroke per character
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key_down(Keystroke::typed(c));
        }
    }

    pub fn copy(&mut self) -> Outcome {
        self.traced("copy", true, |session| {
            let mut event = ClipboardEvent::copy();
            let outcome = session.plugins.clipboard(&mut event, &mut session.editor);
            if !outcome.is_handled() && !event.default_prevented() {
                session.default_copy(&mut event);
            }
            session.write_clipboard(&mut event);
            outcome
        })
    }

    pub fn cut(&mut self) -> Outcome {
        self.traced("cut", true, |session| {
            let mut event = ClipboardEvent::cut();
            let outcome = session.plugins.clipboard(&mut event, &mut session.editor);
            if !outcome.is_handled() && !event.default_prevented() {
                session.default_copy(&mut event);
                let selection = *session.editor.selection();
                session.editor.delete_at_range(selection);
            }
            session.write_clipboard(&mut event);
            outcome
        })
    }

    pub fn paste(&mut self) -> Outcome {
        let data = self.clipboard.read_text();
        self.traced("paste", true, |session| {
            let mut event = ClipboardEvent::paste(data);
            let outcome = session.plugins.clipboard(&mut event, &mut session.editor);
            if !outcome.is_handled() && !event.default_prevented() {
                if let Some(text) = event.take_text().filter(|t| !t.is_empty()) {
                    session.editor.insert_text(&text);
                }
            }
            outcome
        })
    }

    /// Restore the state before the last edit. Returns false if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.traced("undo", false, Self::step_back)
    }

    /// Re-apply the last undone edit. Returns false if there was nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        self.traced("redo", false, Self::step_forward)
    }

    // =========================================================================
    // Host defaults
    // =========================================================================

    fn default_key_action(&mut self, event: &KeyEvent) {
        match event.command {
            Some(Command::InsertNewline) => {
                self.editor.split_block();
            }
            Some(Command::DeleteBackward) => {
                self.editor.delete_backward(1);
            }
            Some(Command::DeleteForward) => {
                self.editor.delete_forward(1);
            }
            Some(Command::SelectAll) => {
                self.editor.select_all();
            }
            Some(Command::Undo) => {
                self.step_back();
            }
            Some(Command::Redo) => {
                self.step_forward();
            }
            Some(command) => {
                debug!(%command, "no plugin handled command");
            }
            None => self.default_typing(&event.keystroke),
        }
    }

    fn default_typing(&mut self, keystroke: &Keystroke) {
        if let Some(text) = keystroke.typed_text() {
            self.editor.insert_text(&text);
            return;
        }
        if !keystroke.mods.is_empty() {
            return;
        }
        match keystroke.key {
            KeyCode::Enter => {
                self.editor.split_block();
            }
            KeyCode::Backspace => {
                self.editor.delete_backward(1);
            }
            KeyCode::Delete => {
                self.editor.delete_forward(1);
            }
            _ => {}
        }
    }

    fn default_copy(&self, event: &mut ClipboardEvent) {
        let text = self.editor.state().selected_text();
        if !text.is_empty() {
            event.set_text(text);
        }
    }

    fn write_clipboard(&mut self, event: &mut ClipboardEvent) {
        let Some(text) = event.take_text() else {
            return;
        };
        if let Err(e) = self.clipboard.write_text(&text) {
            warn!("Failed to write clipboard: {:#}", e);
        }
    }

    fn step_back(&mut self) -> bool {
        let current = self.editor.state().clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.editor.set_state(previous);
                true
            }
            None => false,
        }
    }

    fn step_forward(&mut self) -> bool {
        let current = self.editor.state().clone();
        match self.history.redo(current) {
            Some(next) => {
                self.editor.set_state(next);
                true
            }
            None => false,
        }
    }

    /// Run one event with a debug span, a selection diff, an undo snapshot
    /// when the document changed (if `record`) and an invariant check
    fn traced<R>(&mut self, name: &str, record: bool, f: impl FnOnce(&mut Self) -> R) -> R {
        let _span = span!(Level::DEBUG, "event", event = %name).entered();
        debug!(target: "event", "processing");

        let before_state = self.editor.state().clone();
        let before = SelectionSnapshot::from_state(&before_state);

        let result = f(self);

        let after = self.editor.state();
        if let Some(diff) = before.diff(&SelectionSnapshot::from_state(after)) {
            debug!(target: "selection", %diff, "state changed");
        }
        let invariants = after.check_invariants();
        debug_assert!(
            invariants.is_ok(),
            "invariant violated after {}: {:?}",
            name,
            invariants
        );

        if record && after.document != before_state.document {
            self.history.push(before_state);
        }

        result
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", self.editor.state())
            .field("plugins", &self.plugins)
            .field("undo", &self.history.undo_count())
            .field("redo", &self.history.redo_count())
            .finish_non_exhaustive()
    }
}
