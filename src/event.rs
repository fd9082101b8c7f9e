//! Input events delivered to the plugin chain.
//!
//! Events mirror what a browser hands an editor: a key press with an
//! optional resolved [`Command`], or a clipboard event carrying a plain-text
//! payload. Plugins that take over an event call `prevent_default()` so the
//! session skips its own default action.

use crate::keymap::{Command, Keystroke};

/// A key press, after keymap resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub keystroke: Keystroke,
    /// Command bound to the keystroke in the current context, if any
    pub command: Option<Command>,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(keystroke: Keystroke, command: Option<Command>) -> Self {
        Self {
            keystroke,
            command,
            default_prevented: false,
        }
    }

    /// True when the event resolved to `command`
    pub fn is(&self, command: Command) -> bool {
        self.command == Some(command)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Which clipboard gesture produced the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipboardAction {
    Copy,
    Cut,
    Paste,
}

/// A copy, cut or paste event.
///
/// `data` is the plain-text transfer slot: for paste it holds what the
/// clipboard contained (None when the clipboard was empty or unreadable);
/// for copy and cut plugins fill it and the session writes it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEvent {
    pub action: ClipboardAction,
    data: Option<String>,
    default_prevented: bool,
}

impl ClipboardEvent {
    pub fn copy() -> Self {
        Self::new(ClipboardAction::Copy, None)
    }

    pub fn cut() -> Self {
        Self::new(ClipboardAction::Cut, None)
    }

    pub fn paste(data: Option<String>) -> Self {
        Self::new(ClipboardAction::Paste, data)
    }

    fn new(action: ClipboardAction, data: Option<String>) -> Self {
        Self {
            action,
            data,
            default_prevented: false,
        }
    }

    /// Plain-text payload, if any
    pub fn text(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.data = Some(text.into());
    }

    pub fn take_text(&mut self) -> Option<String> {
        self.data.take()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
