//! Point type: a caret position inside a block.

use serde::Serialize;

use super::block::BlockKey;

/// A position in the document: block key plus character offset in that block.
///
/// Points carry no ordering of their own. Two points can only be compared
/// through the document that owns their blocks, see
/// [`Document::compare_points`](super::Document::compare_points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub key: BlockKey,
    pub offset: usize,
}

impl Point {
    pub const fn new(key: BlockKey, offset: usize) -> Self {
        Self { key, offset }
    }

    /// Start of the given block
    pub const fn start_of(key: BlockKey) -> Self {
        Self { key, offset: 0 }
    }

    /// Same block, different offset
    pub const fn with_offset(self, offset: usize) -> Self {
        Self {
            key: self.key,
            offset,
        }
    }
}
