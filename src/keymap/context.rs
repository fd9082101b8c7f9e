//! Context system for conditional keybindings
//!
//! Lets a binding apply only in some editor states, e.g. a key that copies
//! when text is selected and does something else otherwise.

use crate::editable::EditorState;

/// Editor facts that conditions are evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether the selection is expanded
    pub has_selection: bool,
    /// Whether the focus is on the document's last line
    pub on_last_line: bool,
}

impl KeyContext {
    pub fn from_state(state: &EditorState) -> Self {
        let focus = state.selection.focus.key;
        Self {
            has_selection: state.selection.is_expanded(),
            on_last_line: state.document.last_block().key == focus,
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    HasSelection,
    NoSelection,
    LastLine,
    NotLastLine,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
            Condition::LastLine => ctx.on_last_line,
            Condition::NotLastLine => !ctx.on_last_line,
        }
    }

    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }

    /// Parse a condition name from a keymap file
    pub fn from_name(name: &str) -> Option<Condition> {
        match name.to_lowercase().as_str() {
            "has_selection" | "selection" => Some(Condition::HasSelection),
            "no_selection" | "collapsed" => Some(Condition::NoSelection),
            "last_line" => Some(Condition::LastLine),
            "not_last_line" => Some(Condition::NotLastLine),
            _ => None,
        }
    }
}
