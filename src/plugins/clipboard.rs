//! Copy, cut and paste as flat newline-delimited text.
//!
//! Selections that span several blocks are copied as the block texts joined
//! with `'\n'`. Pasted text is split back into blocks on `'\n'`.

use super::{Next, Outcome, Plugin};
use crate::editor::Editor;
use crate::event::ClipboardEvent;
use crate::util::{char_len, slice_chars};

/// Text copied from `blocks` when the selection starts at `start_offset` in
/// the first block and ends at `end_offset` in the last one.
///
/// Returns `None` when there are no blocks.
pub fn copied_text<S: AsRef<str>>(blocks: &[S], start_offset: usize, end_offset: usize) -> Option<String> {
    let (_, leading) = blocks.split_last()?;
    // Each leading block contributes its text plus one separator
    let excluding_last: usize = leading.iter().map(|b| char_len(b.as_ref()) + 1).sum();
    let joined = blocks.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n");
    Some(slice_chars(&joined, start_offset..excluding_last + end_offset).to_string())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardPlugin;

impl ClipboardPlugin {
    fn copy_selection(event: &mut ClipboardEvent, editor: &Editor) {
        let state = editor.state();
        let start = state.start();
        let end = state.end();
        let blocks: Vec<&str> = state
            .document
            .blocks_between(&start, &end)
            .iter()
            .map(|b| b.text.as_str())
            .collect();

        match copied_text(&blocks, start.offset, end.offset) {
            Some(text) if !text.is_empty() => {
                tracing::debug!(chars = char_len(&text), blocks = blocks.len(), "copied selection");
                event.set_text(text);
            }
            _ => tracing::debug!("nothing to copy"),
        }
    }
}

impl Plugin for ClipboardPlugin {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn on_copy(&self, event: &mut ClipboardEvent, editor: &mut Editor, _next: Next<'_>) -> Outcome {
        event.prevent_default();
        Self::copy_selection(event, editor);
        Outcome::Handled
    }

    fn on_cut(&self, event: &mut ClipboardEvent, editor: &mut Editor, _next: Next<'_>) -> Outcome {
        event.prevent_default();
        Self::copy_selection(event, editor);
        let range = *editor.selection();
        editor.delete_at_range(range);
        Outcome::Handled
    }

    fn on_paste(&self, event: &mut ClipboardEvent, editor: &mut Editor, _next: Next<'_>) -> Outcome {
        event.prevent_default();
        let Some(pasted) = event.text().filter(|t| !t.is_empty()) else {
            tracing::debug!("paste with empty clipboard");
            return Outcome::Handled;
        };

        let mut lines = pasted.split('\n');
        if let Some(first) = lines.next() {
            editor.insert_text(first);
        }
        let mut count = 1;
        for line in lines {
            editor.split_block().insert_text(line);
            count += 1;
        }
        tracing::debug!(lines = count, "pasted text");
        Outcome::Handled
    }
}
