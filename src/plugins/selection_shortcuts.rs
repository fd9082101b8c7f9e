//! Line selection shortcut.

use super::{Next, Outcome, Plugin};
use crate::editor::Editor;
use crate::event::KeyEvent;
use crate::keymap::Command;

/// Selects the focus line, including its line break when another line
/// follows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionShortcutsPlugin;

impl Plugin for SelectionShortcutsPlugin {
    fn name(&self) -> &'static str {
        "selection_shortcuts"
    }

    fn on_key_down(&self, event: &mut KeyEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        if !event.is(Command::SelectLine) {
            return next.key_down(event, editor);
        }

        event.prevent_default();
        let focus_key = editor.selection().focus.key;
        let has_next = editor.document().next_block(focus_key).is_some();

        editor.move_anchor_to_start_of_block();
        if has_next {
            editor.move_focus_to_start_of_next_block();
        } else {
            editor.move_focus_to_end_of_text();
        }
        tracing::debug!(last_line = !has_next, "selected line");
        Outcome::Handled
    }
}
