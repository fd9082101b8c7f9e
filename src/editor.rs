//! Host editor primitives.
//!
//! [`Editor`] owns the current [`EditorState`] and exposes the small set of
//! structural edits plugins are allowed to make. Each primitive swaps in a
//! new document snapshot and leaves the selection valid for it, so the next
//! plugin in the chain (or the session) can read the state right away.
//!
//! Primitives return `&mut Self` so edits chain the way they read:
//!
//! ```
//! use queryline::editable::EditorState;
//! use queryline::editor::Editor;
//!
//! let mut editor = Editor::new(EditorState::from_text("  foo"));
//! editor.move_focus_to_end_of_text();
//! editor.move_anchor_to_start_of_block();
//! editor.split_block().insert_text("  ");
//! assert_eq!(editor.state().document.text(), "\n  ");
//! ```

use crate::editable::{Document, EditorState, Point, Selection};
use crate::util::char_len;

#[derive(Debug, Clone)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new(state: EditorState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Replace the whole state (undo/redo, external resets)
    pub fn set_state(&mut self, state: EditorState) {
        self.state = state;
    }

    // =========================================================================
    // Selection primitives
    // =========================================================================

    /// Set the selection, clamping offsets into their blocks
    ///
    /// # Panics
    ///
    /// Panics if either point names a block that is not in the document.
    pub fn select(&mut self, selection: Selection) -> &mut Self {
        let doc = &self.state.document;
        self.state.selection = Selection::new(doc.clamp(selection.anchor), doc.clamp(selection.focus));
        self
    }

    /// Select the entire document
    pub fn select_all(&mut self) -> &mut Self {
        let doc = &self.state.document;
        self.state.selection = Selection::new(doc.start_point(), doc.end_point());
        self
    }

    /// Move the anchor to offset 0 of the block holding the focus
    pub fn move_anchor_to_start_of_block(&mut self) -> &mut Self {
        let key = self.state.focus_block().key;
        self.state.selection.anchor = Point::start_of(key);
        self
    }

    /// Move the focus to the start of the block after the focus block.
    /// Does nothing on the last block.
    pub fn move_focus_to_start_of_next_block(&mut self) -> &mut Self {
        let focus = self.state.selection.focus;
        if let Some(next) = self.state.document.next_block(focus.key) {
            self.state.selection.focus = Point::start_of(next.key);
        }
        self
    }

    /// Move the focus to the end of the focus block's text
    pub fn move_focus_to_end_of_text(&mut self) -> &mut Self {
        let block = self.state.focus_block();
        let end = Point::new(block.key, block.len());
        self.state.selection.focus = end;
        self
    }

    // =========================================================================
    // Editing primitives
    // =========================================================================

    /// Insert `text` at the caret, replacing an expanded selection first.
    /// The caret ends after the inserted text.
    pub fn insert_text(&mut self, text: &str) -> &mut Self {
        if self.state.selection.is_expanded() {
            let range = self.state.selection;
            self.delete_at_range(range);
        }
        if text.is_empty() {
            return self;
        }

        let at = self.state.selection.focus;
        self.state.document = self.state.document.insert_text(&at, text);
        self.state.selection = Selection::collapsed(at.with_offset(at.offset + char_len(text)));
        self
    }

    /// Delete `n` characters after the caret. Block boundaries count as one
    /// character, so deleting past the end of a line joins the next one.
    /// An expanded selection is deleted instead.
    pub fn delete_forward(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        if self.state.selection.is_expanded() {
            let range = self.state.selection;
            return self.delete_at_range(range);
        }

        let doc = &self.state.document;
        let at = self.state.selection.focus;
        let flat = doc.flat_offset(&at);
        let end = doc.point_at((flat + n).min(doc.len_chars()));
        self.state.document = doc.remove_range(&at, &end);
        self.state.selection = Selection::collapsed(at);
        self
    }

    /// Delete `n` characters before the caret, joining blocks as needed.
    /// An expanded selection is deleted instead.
    pub fn delete_backward(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        if self.state.selection.is_expanded() {
            let range = self.state.selection;
            return self.delete_at_range(range);
        }

        let doc = &self.state.document;
        let at = self.state.selection.focus;
        let start = doc.point_at(doc.flat_offset(&at).saturating_sub(n));
        self.state.document = doc.remove_range(&start, &at);
        self.state.selection = Selection::collapsed(start);
        self
    }

    /// Delete the text covered by `range` and collapse the selection to the
    /// start of the deleted range. A collapsed range is a no-op.
    pub fn delete_at_range(&mut self, range: Selection) -> &mut Self {
        if range.is_collapsed() {
            return self;
        }
        let doc = &self.state.document;
        let start = doc.clamp(range.start(doc));
        let end = doc.clamp(range.end(doc));
        self.state.document = doc.remove_range(&start, &end);
        self.state.selection = Selection::collapsed(start);
        self
    }

    /// Split the focus block at the caret; the caret moves to the start of
    /// the new block. An expanded selection is deleted first.
    pub fn split_block(&mut self) -> &mut Self {
        if self.state.selection.is_expanded() {
            let range = self.state.selection;
            self.delete_at_range(range);
        }
        let at = self.state.selection.focus;
        let (document, key) = self.state.document.split_block(&at);
        self.state.document = document;
        self.state.selection = Selection::collapsed(Point::start_of(key));
        self
    }
}
