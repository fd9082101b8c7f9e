//! Command enum: everything a keystroke can be bound to

use std::fmt;
use std::str::FromStr;

/// Editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Plugin commands
    /// Delete from the caret to the end of the line
    DeleteToLineEnd,
    /// Break the line, carrying indentation forward
    InsertNewline,
    /// Select the whole focus line
    SelectLine,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // Host defaults
    DeleteBackward,
    DeleteForward,
    SelectAll,
    Undo,
    Redo,

    /// Removes an inherited binding when merging keymaps
    Unbound,
}

impl Command {
    pub const ALL: [Command; 12] = [
        Command::DeleteToLineEnd,
        Command::InsertNewline,
        Command::SelectLine,
        Command::Copy,
        Command::Cut,
        Command::Paste,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::SelectAll,
        Command::Undo,
        Command::Redo,
        Command::Unbound,
    ];

    /// Name as written in keymap files
    pub fn name(self) -> &'static str {
        match self {
            Command::DeleteToLineEnd => "DeleteToLineEnd",
            Command::InsertNewline => "InsertNewline",
            Command::SelectLine => "SelectLine",
            Command::Copy => "Copy",
            Command::Cut => "Cut",
            Command::Paste => "Paste",
            Command::DeleteBackward => "DeleteBackward",
            Command::DeleteForward => "DeleteForward",
            Command::SelectAll => "SelectAll",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Unbound => "Unbound",
        }
    }

    /// Whether a binding for this command still fires when extra modifiers
    /// are held, so `shift+enter` breaks the line and `ctrl+alt+k` clears it
    pub fn ignores_extra_modifiers(self) -> bool {
        matches!(self, Command::InsertNewline | Command::DeleteToLineEnd)
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
