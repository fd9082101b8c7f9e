//! Selection types for the block document model.

use std::cmp::Ordering;

use serde::Serialize;

use super::document::Document;
use super::point::Point;

/// A text selection with anchor (fixed end) and focus (moving end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Point,
    /// Where the caret is (moving point)
    pub focus: Point,
}

impl Selection {
    pub fn new(anchor: Point, focus: Point) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed selection (a plain caret)
    pub fn collapsed(point: Point) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    /// Anchor and focus are the same point
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Anchor and focus differ
    pub fn is_expanded(&self) -> bool {
        !self.is_collapsed()
    }

    /// Focus lies before anchor in `doc`
    pub fn is_backward(&self, doc: &Document) -> bool {
        doc.compare_points(&self.focus, &self.anchor) == Ordering::Less
    }

    /// Earlier of anchor and focus in `doc`
    pub fn start(&self, doc: &Document) -> Point {
        if self.is_backward(doc) {
            self.focus
        } else {
            self.anchor
        }
    }

    /// Later of anchor and focus in `doc`
    pub fn end(&self, doc: &Document) -> Point {
        if self.is_backward(doc) {
            self.anchor
        } else {
            self.focus
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::BlockKey;

    fn doc() -> Document {
        Document::from_text("foo\nbar")
    }

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(Point::new(BlockKey(1), 2));
        assert!(sel.is_collapsed());
        assert!(!sel.is_expanded());
    }

    #[test]
    fn test_selection_start_end() {
        let doc = doc();
        let a = Point::new(BlockKey(0), 1);
        let b = Point::new(BlockKey(1), 2);

        let forward = Selection::new(a, b);
        assert_eq!(forward.start(&doc), a);
        assert_eq!(forward.end(&doc), b);
        assert!(!forward.is_backward(&doc));

        // Offsets alone would order these the other way round
        let backward = Selection::new(b, a);
        assert_eq!(backward.start(&doc), a);
        assert_eq!(backward.end(&doc), b);
        assert!(backward.is_backward(&doc));
    }
}
