//! Block document model for the query editor.
//!
//! # Architecture
//!
//! - [`Block`] / [`BlockKey`]: one line of text and its stable identifier
//! - [`Document`]: ordered, never-empty list of blocks; edits return new snapshots
//! - [`Point`] / [`Selection`]: caret positions and anchor/focus ranges
//! - [`EditorState`]: document plus selection, the value the host owns
//! - [`EditHistory`]: snapshot-based undo/redo
//!
//! # Example
//!
//! ```
//! use queryline::editable::{BlockKey, EditorState, Point, Selection};
//!
//! let state = EditorState::from_text("foo\nbar").with_selection(Selection::new(
//!     Point::new(BlockKey(0), 1),
//!     Point::new(BlockKey(1), 2),
//! ));
//! assert_eq!(state.selected_text(), "oo\nba");
//! ```

mod block;
mod document;
mod history;
mod point;
mod selection;
mod state;

pub use block::{Block, BlockKey};
pub use document::Document;
pub use history::{EditHistory, DEFAULT_HISTORY_SIZE};
pub use point::Point;
pub use selection::Selection;
pub use state::EditorState;
