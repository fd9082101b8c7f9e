//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use queryline::clipboard::MemoryClipboard;
use queryline::editable::{EditorState, Point, Selection};
use queryline::keymap::{KeyCode, Keystroke, Modifiers};
use queryline::session::Session;

/// Point at `(line, offset)` in the session's current document
pub fn point(session: &Session, line: usize, offset: usize) -> Point {
    let block = session
        .state()
        .document
        .block_at(line)
        .unwrap_or_else(|| panic!("no line {line}"));
    Point::new(block.key, offset)
}

/// Session over `text` with a collapsed caret and an empty in-memory clipboard
pub fn test_session(text: &str, line: usize, offset: usize) -> Session {
    let mut session = Session::new(EditorState::from_text(text));
    let caret = point(&session, line, offset);
    session.select(Selection::collapsed(caret));
    session
}

/// Session over `text` with a selection from anchor to focus
pub fn test_session_with_selection(
    text: &str,
    anchor: (usize, usize),
    focus: (usize, usize),
) -> Session {
    let mut session = Session::new(EditorState::from_text(text));
    let selection = Selection::new(
        point(&session, anchor.0, anchor.1),
        point(&session, focus.0, focus.1),
    );
    session.select(selection);
    session
}

pub fn with_clipboard(session: Session, text: &str) -> Session {
    session.with_clipboard(Box::new(MemoryClipboard::with_text(text)))
}

pub fn lines(session: &Session) -> Vec<String> {
    session
        .state()
        .document
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn text(session: &Session) -> String {
    session.state().document.text()
}

/// `(line, offset)` of a point in the session's document
pub fn position(session: &Session, point: &Point) -> (usize, usize) {
    let line = session
        .state()
        .document
        .index_of(point.key)
        .expect("point references a block in the document");
    (line, point.offset)
}

pub fn caret(session: &Session) -> (usize, usize) {
    position(session, &session.state().selection.focus)
}

pub fn anchor(session: &Session) -> (usize, usize) {
    position(session, &session.state().selection.anchor)
}

pub fn clipboard_text(session: &mut Session) -> Option<String> {
    session.clipboard().read_text()
}

pub fn ctrl_k() -> Keystroke {
    Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL)
}

pub fn enter() -> Keystroke {
    Keystroke::key(KeyCode::Enter)
}

pub fn select_line() -> Keystroke {
    Keystroke::new(KeyCode::Char('l'), Modifiers::cmd())
}

pub fn cmd(c: char) -> Keystroke {
    Keystroke::char_with_mods(c, Modifiers::cmd())
}
