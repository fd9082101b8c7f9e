//! Edge cases and randomized event sequences
//!
//! The randomized tests drive sessions with long pseudo-random event
//! sequences and check the selection stays valid after every event.

mod common;

use common::{cmd, ctrl_k, enter, lines, select_line, test_session, text, with_clipboard};
use queryline::clipboard::ClipboardBackend;
use queryline::editable::{EditorState, Point, Selection};
use queryline::keymap::{default_bindings, KeyCode, Keymap, Keystroke};
use queryline::{EditorConfig, Outcome, Session};

/// Small deterministic generator so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

const SNIPPETS: &[&str] = &["", "x", "  ", "\t", "a\nb", "\n", "  foo\n  bar\n", "é→ü", "\r\n"];

fn random_selection(rng: &mut Lcg, session: &Session) -> Selection {
    let document = &session.state().document;
    let mut random_point = || {
        let block = &document.blocks()[rng.below(document.block_count())];
        let offset = rng.below(block.len() + 2);
        Point::new(block.key, offset)
    };
    Selection::new(random_point(), random_point())
}

fn random_event(rng: &mut Lcg, session: &mut Session) -> String {
    match rng.below(12) {
        0 => {
            session.key_down(ctrl_k());
            "ctrl+k".into()
        }
        1 => {
            session.key_down(enter());
            "enter".into()
        }
        2 => {
            session.key_down(select_line());
            "select line".into()
        }
        3 => {
            session.copy();
            "copy".into()
        }
        4 => {
            session.cut();
            "cut".into()
        }
        5 => {
            let snippet = *rng.pick(SNIPPETS);
            let _ = session.clipboard().write_text(snippet);
            session.paste();
            format!("paste {snippet:?}")
        }
        6 => {
            let selection = random_selection(rng, session);
            session.select(selection);
            "select".into()
        }
        7 => {
            let snippet = *rng.pick(SNIPPETS);
            session.type_text(snippet);
            format!("type {snippet:?}")
        }
        8 => {
            session.key_down(Keystroke::key(KeyCode::Backspace));
            "backspace".into()
        }
        9 => {
            session.key_down(Keystroke::key(KeyCode::Delete));
            "delete".into()
        }
        10 => {
            session.undo();
            "undo".into()
        }
        _ => {
            session.redo();
            "redo".into()
        }
    }
}

#[test]
fn test_random_sequences_keep_invariants() {
    for seed in 0..40u64 {
        let mut rng = Lcg(seed);
        let initial = *rng.pick(&["", "a", "  foo\nbar", "x\n\ny", "\t\tdeep\n  mid\nend"]);
        let mut session = Session::new(EditorState::from_text(initial));
        let mut log = Vec::new();

        for _ in 0..200 {
            log.push(random_event(&mut rng, &mut session));
            let state = session.state();
            if let Err(e) = state.check_invariants() {
                panic!("seed {seed}: {e} after {:?}", log);
            }
            assert!(state.document.block_count() >= 1, "seed {seed}: empty document");
        }
    }
}

#[test]
fn test_undo_everything_returns_to_start() {
    for seed in 100..120u64 {
        let mut rng = Lcg(seed);
        let config = EditorConfig {
            history_size: usize::MAX,
            clipboard: ClipboardBackend::Memory,
            ..EditorConfig::default()
        };
        let mut session = Session::from_config(
            EditorState::from_text("  foo\nbar"),
            &config,
            Keymap::with_bindings(default_bindings()),
        );
        let start = session.state().document.clone();

        for _ in 0..50 {
            // Skip undo/redo so every recorded step stays on the stack
            match rng.below(10) {
                0 => {
                    session.key_down(ctrl_k());
                }
                1 => {
                    session.key_down(enter());
                }
                2 => {
                    session.cut();
                }
                3 | 4 => {
                    let selection = random_selection(&mut rng, &session);
                    session.select(selection);
                }
                5 => {
                    let _ = session.clipboard().write_text("p\nq");
                    session.paste();
                }
                _ => session.type_text(*rng.pick(SNIPPETS)),
            }
        }

        while session.undo() {}
        assert_eq!(session.state().document, start, "seed {seed}");
    }
}

// ========================================================================
// Degenerate documents
// ========================================================================

#[test]
fn test_empty_document_survives_every_command() {
    let mut session = test_session("", 0, 0);
    for keystroke in [
        ctrl_k(),
        select_line(),
        cmd('c'),
        cmd('x'),
        cmd('v'),
        cmd('a'),
        Keystroke::key(KeyCode::Backspace),
        Keystroke::key(KeyCode::Delete),
    ] {
        session.key_down(keystroke);
        assert_eq!(text(&session), "", "after {keystroke}");
    }
}

#[test]
fn test_paste_lone_newline() {
    let mut session = with_clipboard(test_session("ab", 0, 1), "\n");
    session.paste();
    assert_eq!(lines(&session), vec!["a", "b"]);
}

#[test]
fn test_paste_only_newlines() {
    let mut session = with_clipboard(test_session("", 0, 0), "\n\n\n");
    session.paste();
    assert_eq!(session.state().document.block_count(), 4);
}

#[test]
fn test_select_all_then_clear_line_defers() {
    let mut session = test_session("a\nb", 0, 0);
    session.key_down(cmd('a'));
    assert_eq!(session.key_down(ctrl_k()), Outcome::Deferred);
    assert_eq!(text(&session), "a\nb");
}

#[test]
fn test_select_all_then_type_replaces_everything() {
    let mut session = test_session("a\nb\nc", 1, 0);
    session.key_down(cmd('a'));
    session.type_text("z");
    assert_eq!(lines(&session), vec!["z"]);
}

#[test]
fn test_out_of_range_selection_is_clamped() {
    let mut session = test_session("abc", 0, 0);
    let key = session.state().document.first_block().key;
    session.select(Selection::collapsed(Point::new(key, 99)));
    assert_eq!(session.state().selection.focus.offset, 3);
}

#[test]
fn test_backspace_at_document_start_is_a_no_op() {
    let mut session = test_session("abc", 0, 0);
    session.key_down(Keystroke::key(KeyCode::Backspace));
    assert_eq!(text(&session), "abc");
    assert!(!session.history().can_undo());
}
