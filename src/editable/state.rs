//! EditorState - the document snapshot plus the selection over it.

use serde::Serialize;

use super::block::Block;
use super::document::Document;
use super::point::Point;
use super::selection::Selection;

/// The value the host editor owns and plugins edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorState {
    pub document: Document,
    pub selection: Selection,
}

impl EditorState {
    /// Wrap a document with the caret at its start
    pub fn new(document: Document) -> Self {
        let selection = Selection::collapsed(document.start_point());
        Self {
            document,
            selection,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(Document::from_text(text))
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Block holding the focus
    ///
    /// # Panics
    ///
    /// Panics if the focus does not reference a block in the document.
    pub fn focus_block(&self) -> &Block {
        self.block_for(&self.selection.focus)
    }

    /// Block holding the start of the selection
    pub fn start_block(&self) -> &Block {
        let start = self.selection.start(&self.document);
        self.block_for(&start)
    }

    pub fn start(&self) -> Point {
        self.selection.start(&self.document)
    }

    pub fn end(&self) -> Point {
        self.selection.end(&self.document)
    }

    /// Flat selected text, empty when collapsed
    pub fn selected_text(&self) -> String {
        if self.selection.is_collapsed() {
            return String::new();
        }
        self.document.text_between(&self.start(), &self.end())
    }

    /// Check the selection against the document.
    ///
    /// Both points must name existing blocks, with offsets inside the
    /// block's text.
    pub fn check_invariants(&self) -> Result<(), String> {
        for (name, point) in [
            ("anchor", &self.selection.anchor),
            ("focus", &self.selection.focus),
        ] {
            let Some(block) = self.document.block(point.key) else {
                return Err(format!("{name} references missing block {}", point.key));
            };
            if point.offset > block.len() {
                return Err(format!(
                    "{name} offset {} is past the end of block {} (len {})",
                    point.offset,
                    point.key,
                    block.len()
                ));
            }
        }
        Ok(())
    }

    fn block_for(&self, point: &Point) -> &Block {
        match self.document.block(point.key) {
            Some(block) => block,
            None => panic!("selection references missing block {}", point.key),
        }
    }
}
