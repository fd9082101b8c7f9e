//! Benchmarks for event dispatch through the plugin chain
//!
//! Every event clones the state for undo and diffs the selection, so these
//! measure the whole per-event path against documents of different sizes.
//!
//! Run with: cargo bench plugin_dispatch

use queryline::editable::{Document, EditorState, Selection};
use queryline::keymap::{KeyCode, Keystroke, Modifiers};
use queryline::plugins::copied_text;
use queryline::Session;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Session over `lines` indented lines with the caret at the end of the last
fn make_session(lines: usize) -> Session {
    let document = Document::from_lines((0..lines).map(|i| format!("  rate(metric_{i}[5m])")));
    let end = document.end_point();
    Session::new(EditorState::new(document).with_selection(Selection::collapsed(end)))
}

#[divan::bench(args = [1, 100, 1000])]
fn type_characters(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| make_session(lines))
        .bench_local_values(|mut session| {
            session.type_text("sum by (job)");
            session
        });
}

#[divan::bench(args = [1, 100, 1000])]
fn enter_with_indent(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| make_session(lines))
        .bench_local_values(|mut session| {
            for _ in 0..10 {
                session.key_down(Keystroke::key(KeyCode::Enter));
            }
            session
        });
}

#[divan::bench(args = [1, 100, 1000])]
fn select_line_then_clear(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| make_session(lines))
        .bench_local_values(|mut session| {
            session.key_down(Keystroke::new(KeyCode::Char('l'), Modifiers::cmd()));
            session.key_down(Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL));
            session
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn paste_lines(bencher: divan::Bencher, lines: usize) {
    let text = vec!["  up{job=\"api\"}"; lines].join("\n");
    bencher
        .with_inputs(|| {
            let mut session = make_session(10);
            let _ = session.clipboard().write_text(&text);
            session
        })
        .bench_local_values(|mut session| {
            session.paste();
            session
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn copied_text_across_blocks(lines: usize) -> Option<String> {
    let blocks: Vec<String> = (0..lines).map(|i| format!("line {i}")).collect();
    copied_text(divan::black_box(&blocks), 2, 3)
}
