//! Blocks: one line of the query document.

use std::fmt;

use serde::Serialize;

use crate::util::char_len;

/// Stable identifier of a block within a document's lineage.
///
/// Keys are handed out by the owning [`Document`](super::Document) and are
/// never reused, so a key held across an edit either still names the same
/// line or names nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockKey(pub u64);

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single line of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub key: BlockKey,
    pub text: String,
}

impl Block {
    pub fn new(key: BlockKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }

    /// Length of the text in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_len_counts_chars() {
        let block = Block::new(BlockKey(0), "héllo");
        assert_eq!(block.len(), 5);
        assert!(!block.is_empty());
    }

    #[test]
    fn test_block_key_display() {
        assert_eq!(BlockKey(7).to_string(), "#7");
    }
}
