//! Select the current line (cmd+l)

mod common;

use common::{anchor, caret, select_line, test_session, test_session_with_selection};
use queryline::Outcome;

#[test]
fn test_selects_line_and_its_break() {
    let mut session = test_session("one\ntwo\nthree", 1, 2);
    assert_eq!(session.key_down(select_line()), Outcome::Handled);
    assert_eq!(anchor(&session), (1, 0));
    assert_eq!(caret(&session), (2, 0));
    assert_eq!(session.state().selected_text(), "two\n");
}

#[test]
fn test_last_line_extends_to_end_of_document() {
    let mut session = test_session("one\ntwo", 1, 1);
    session.key_down(select_line());
    assert_eq!(anchor(&session), (1, 0));
    assert_eq!(caret(&session), (1, 3));
    assert_eq!(session.state().selected_text(), "two");
}

#[test]
fn test_single_empty_line() {
    let mut session = test_session("", 0, 0);
    assert_eq!(session.key_down(select_line()), Outcome::Handled);
    assert_eq!(anchor(&session), (0, 0));
    assert_eq!(caret(&session), (0, 0));
}

#[test]
fn test_uses_focus_line_of_expanded_selection() {
    let mut session = test_session_with_selection("a\nbb\ncc\nd", (0, 1), (2, 1));
    session.key_down(select_line());
    assert_eq!(anchor(&session), (2, 0));
    assert_eq!(caret(&session), (3, 0));
}

#[test]
fn test_repeat_moves_down_one_line() {
    let mut session = test_session("a\nb\nc", 0, 0);
    session.key_down(select_line());
    session.key_down(select_line());
    assert_eq!(anchor(&session), (1, 0));
    assert_eq!(caret(&session), (2, 0));
}

#[test]
fn test_select_line_is_not_an_undo_step() {
    let mut session = test_session("one\ntwo", 0, 0);
    session.key_down(select_line());
    assert!(!session.history().can_undo());
}
