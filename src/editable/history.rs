//! Edit history (undo/redo) over editor snapshots.
//!
//! Documents are immutable snapshots, so an undo entry is simply the
//! [`EditorState`] that was current before the edit.

use super::state::EditorState;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// Undo/redo stacks of editor snapshots.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditorState>,
    redo_stack: Vec<EditorState>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record the state that preceded an edit (clears redo stack)
    pub fn push(&mut self, before: EditorState) {
        self.redo_stack.clear();
        self.undo_stack.push(before);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Step back: returns the state to restore, remembering `current` for redo
    pub fn undo(&mut self, current: EditorState) -> Option<EditorState> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore, remembering `current` for undo
    pub fn redo(&mut self, current: EditorState) -> Option<EditorState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
