//! Document: an ordered, never-empty list of blocks.
//!
//! Documents are snapshots. Every edit method takes `&self` and returns a new
//! `Document`; the host swaps its snapshot and the undo history keeps the
//! old ones.
//!
//! # Flat addressing
//!
//! A document reads as its block texts joined with `'\n'`. Each block
//! boundary counts as one character in that view. [`Document::flat_offset`]
//! and [`Document::point_at`] convert between points and flat offsets, which
//! lets deletes by character count run across block boundaries.

use std::cmp::Ordering;

use serde::Serialize;

use super::block::{Block, BlockKey};
use super::point::Point;
use crate::util::{slice_chars, split_at_char};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
    #[serde(skip)]
    next_key: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document with a single empty block
    pub fn new() -> Self {
        Self::from_lines([""])
    }

    /// Split `text` on `'\n'`, one block per line
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.split('\n'))
    }

    /// Build a document from lines. An empty iterator yields one empty block.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut blocks: Vec<Block> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| Block::new(BlockKey(i as u64), line))
            .collect();
        if blocks.is_empty() {
            blocks.push(Block::new(BlockKey(0), ""));
        }
        let next_key = blocks.len() as u64;
        Self { blocks, next_key }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks (always >= 1)
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn first_block(&self) -> &Block {
        &self.blocks[0]
    }

    pub fn last_block(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn index_of(&self, key: BlockKey) -> Option<usize> {
        self.blocks.iter().position(|b| b.key == key)
    }

    pub fn block(&self, key: BlockKey) -> Option<&Block> {
        self.blocks.iter().find(|b| b.key == key)
    }

    /// Block following `key`, if any
    pub fn next_block(&self, key: BlockKey) -> Option<&Block> {
        self.index_of(key).and_then(|i| self.blocks.get(i + 1))
    }

    /// Full text with blocks joined by `'\n'`
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.text.as_str())
    }

    /// Total length of the flat view in characters
    pub fn len_chars(&self) -> usize {
        self.blocks.iter().map(Block::len).sum::<usize>() + self.blocks.len() - 1
    }

    pub fn start_point(&self) -> Point {
        Point::start_of(self.first_block().key)
    }

    pub fn end_point(&self) -> Point {
        let last = self.last_block();
        Point::new(last.key, last.len())
    }

    /// Clamp a point's offset to its block's length
    ///
    /// # Panics
    ///
    /// Panics if the point's block is not in this document.
    pub fn clamp(&self, point: Point) -> Point {
        let len = self.expect_block(point.key).1.len();
        point.with_offset(point.offset.min(len))
    }

    /// Order two points by block position, then offset
    ///
    /// # Panics
    ///
    /// Panics if either point's block is not in this document.
    pub fn compare_points(&self, a: &Point, b: &Point) -> Ordering {
        let ia = self.expect_block(a.key).0;
        let ib = self.expect_block(b.key).0;
        ia.cmp(&ib).then(a.offset.cmp(&b.offset))
    }

    /// Blocks from `start`'s block through `end`'s block, inclusive
    ///
    /// # Panics
    ///
    /// Panics if either point's block is not in this document.
    pub fn blocks_between(&self, start: &Point, end: &Point) -> &[Block] {
        let first = self.expect_block(start.key).0;
        let last = self.expect_block(end.key).0;
        if first > last {
            return &[];
        }
        &self.blocks[first..=last]
    }

    /// Offset of `point` in the flat, newline-joined view
    ///
    /// # Panics
    ///
    /// Panics if the point's block is not in this document.
    pub fn flat_offset(&self, point: &Point) -> usize {
        let (index, block) = self.expect_block(point.key);
        let before: usize = self.blocks[..index].iter().map(|b| b.len() + 1).sum();
        before + point.offset.min(block.len())
    }

    /// Point at a flat offset, clamped to the end of the document
    pub fn point_at(&self, flat: usize) -> Point {
        let mut remaining = flat;
        for block in &self.blocks {
            let len = block.len();
            if remaining <= len {
                return Point::new(block.key, remaining);
            }
            remaining -= len + 1;
        }
        self.end_point()
    }

    /// Flat text between two ordered points
    pub fn text_between(&self, start: &Point, end: &Point) -> String {
        let text = self.text();
        slice_chars(&text, self.flat_offset(start)..self.flat_offset(end)).to_string()
    }

    // =========================================================================
    // Snapshot-producing edits
    // =========================================================================

    /// Insert `text` at `at`. The text is stored verbatim; callers that want
    /// new lines split the block themselves.
    pub fn insert_text(&self, at: &Point, text: &str) -> Document {
        let index = self.expect_block(at.key).0;
        let (head, tail) = split_at_char(&self.blocks[index].text, at.offset);
        let mut next = self.clone();
        next.blocks[index].text = format!("{head}{text}{tail}");
        next
    }

    /// Remove everything between two ordered points, joining their blocks.
    /// The start block keeps its key; blocks after it up to the end block
    /// are dropped.
    pub fn remove_range(&self, start: &Point, end: &Point) -> Document {
        if self.compare_points(start, end) != Ordering::Less {
            return self.clone();
        }
        let first = self.expect_block(start.key).0;
        let last = self.expect_block(end.key).0;

        let head = split_at_char(&self.blocks[first].text, start.offset).0;
        let tail = split_at_char(&self.blocks[last].text, end.offset).1;
        let joined = format!("{head}{tail}");

        let mut next = self.clone();
        next.blocks.drain(first + 1..=last);
        next.blocks[first].text = joined;
        next
    }

    /// Split the block at `at`. Text after the offset moves into a new block
    /// inserted right after; returns the new snapshot and the new block's key.
    pub fn split_block(&self, at: &Point) -> (Document, BlockKey) {
        let index = self.expect_block(at.key).0;
        let mut next = self.clone();
        let key = BlockKey(next.next_key);
        next.next_key += 1;

        let (head, tail) = split_at_char(&self.blocks[index].text, at.offset);
        let moved = Block::new(key, tail);
        next.blocks[index].text = head.to_string();
        next.blocks.insert(index + 1, moved);
        (next, key)
    }

    fn expect_block(&self, key: BlockKey) -> (usize, &Block) {
        match self.blocks.iter().enumerate().find(|(_, b)| b.key == key) {
            Some(found) => found,
            None => panic!("block {key} is not part of this document"),
        }
    }
}
