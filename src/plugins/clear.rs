//! Clears the rest of the line after the caret.

use super::{Next, Outcome, Plugin};
use crate::editor::Editor;
use crate::event::KeyEvent;
use crate::keymap::Command;

#[derive(Debug, Default, Clone, Copy)]
pub struct ClearPlugin;

impl Plugin for ClearPlugin {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn on_key_down(&self, event: &mut KeyEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        // Only a plain caret qualifies, whatever the key
        if editor.selection().is_expanded() {
            return next.key_down(event, editor);
        }
        if !event.is(Command::DeleteToLineEnd) {
            return next.key_down(event, editor);
        }

        event.prevent_default();
        let offset = editor.selection().focus.offset;
        let forward = editor.state().focus_block().len().saturating_sub(offset);
        tracing::debug!(offset, forward, "clearing to end of line");
        editor.delete_forward(forward);
        Outcome::Handled
    }
}
