//! Carries the current line's indentation onto a new line.

use super::{Next, Outcome, Plugin};
use crate::editor::Editor;
use crate::event::KeyEvent;
use crate::keymap::Command;
use crate::util::leading_whitespace_len;

/// Indent to carry over from `line`.
///
/// The width is the length of the leading whitespace run, but the fill is
/// the line's first character repeated. A line starting `"\t  "` therefore
/// yields three tabs. Lines without leading whitespace yield `""`.
pub fn indent_for(line: &str) -> String {
    let width = leading_whitespace_len(line);
    match line.chars().next() {
        Some(first) if width > 0 => std::iter::repeat(first).take(width).collect(),
        _ => String::new(),
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NewlinePlugin;

impl Plugin for NewlinePlugin {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn on_key_down(&self, event: &mut KeyEvent, editor: &mut Editor, next: Next<'_>) -> Outcome {
        if editor.selection().is_expanded() {
            return next.key_down(event, editor);
        }
        if !event.is(Command::InsertNewline) {
            return next.key_down(event, editor);
        }

        event.prevent_default();
        let indent = indent_for(&editor.state().start_block().text);
        tracing::debug!(indent = indent.len(), "newline with indent");
        editor.split_block().insert_text(&indent);
        Outcome::Handled
    }
}
