//! Replay scripts
//!
//! A script is a list of input steps run against a [`Session`]. Positions are
//! `[line, offset]` pairs against the document as it is when the step runs;
//! offsets past the end of a line are clamped.
//!
//! ```yaml
//! steps:
//!   - cursor: [0, 3]
//!   - key: "ctrl+k"
//!   - select: { anchor: [0, 1], focus: [1, 2] }
//!   - copy
//!   - type: "rate("
//!   - clipboard: "x\ny"
//!   - paste
//!   - undo
//! ```
//!
//! JSON is accepted too, being a subset of YAML.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{Document, EditorState, Point, Selection};
use crate::keymap::parse_key_string;
use crate::plugins::Outcome;
use crate::session::Session;

/// `[line, offset]`, both zero-based
pub type Position = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Collapse the selection at a position
    Cursor(Position),
    Select { anchor: Position, focus: Position },
    /// Press a key, written like keymap keys ("ctrl+k", "enter")
    Key(String),
    /// Type text one keystroke per character
    Type(String),
    /// Put text on the clipboard without touching the document
    Clipboard(String),
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    #[serde(deserialize_with = "serde_yaml::with::singleton_map_recursive::deserialize")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Invalid replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Run every step against `session`, stopping at the first invalid one
    pub fn run(&self, session: &mut Session) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            let outcome = run_step(step, session).with_context(|| format!("step {}", i + 1))?;
            tracing::debug!(step = i + 1, ?step, ?outcome, "replayed");
            reports.push(StepReport {
                step: i + 1,
                outcome,
            });
        }
        Ok(reports)
    }
}

fn run_step(step: &Step, session: &mut Session) -> Result<Option<Outcome>> {
    let outcome = match step {
        Step::Cursor(at) => {
            let point = resolve(&session.state().document, *at)?;
            session.select(Selection::collapsed(point));
            None
        }
        Step::Select { anchor, focus } => {
            let document = &session.state().document;
            let selection = Selection::new(resolve(document, *anchor)?, resolve(document, *focus)?);
            session.select(selection);
            None
        }
        Step::Key(key) => {
            let keystroke = parse_key_string(key).with_context(|| format!("bad key {:?}", key))?;
            Some(session.key_down(keystroke))
        }
        Step::Type(text) => {
            session.type_text(text);
            None
        }
        Step::Clipboard(text) => {
            session.clipboard().write_text(text)?;
            None
        }
        Step::Copy => Some(session.copy()),
        Step::Cut => Some(session.cut()),
        Step::Paste => Some(session.paste()),
        Step::Undo => {
            session.undo();
            None
        }
        Step::Redo => {
            session.redo();
            None
        }
    };
    Ok(outcome)
}

/// Turn a `[line, offset]` pair into a point, rejecting missing lines
fn resolve(document: &Document, (line, offset): Position) -> Result<Point> {
    let Some(block) = document.block_at(line) else {
        bail!(
            "line {} does not exist (document has {} lines)",
            line,
            document.block_count()
        );
    };
    Ok(Point::new(block.key, offset.min(block.len())))
}

/// How one step was dispatched. Steps that are not events have no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

/// Final state after a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub lines: Vec<String>,
    pub anchor: Position,
    pub focus: Position,
    pub selected_text: String,
    pub clipboard: Option<String>,
    pub steps: Vec<StepReport>,
}

impl Report {
    pub fn new(session: &mut Session, steps: Vec<StepReport>) -> Self {
        let clipboard = session.clipboard().read_text();
        let state = session.state();
        Self {
            lines: state.document.lines().map(str::to_string).collect(),
            anchor: position(state, &state.selection.anchor),
            focus: position(state, &state.selection.focus),
            selected_text: state.selected_text(),
            clipboard,
            steps,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out, "---");
        let _ = writeln!(
            out,
            "selection: ({},{}) → ({},{})",
            self.anchor.0, self.anchor.1, self.focus.0, self.focus.1
        );
        if let Some(clipboard) = &self.clipboard {
            let _ = writeln!(out, "clipboard: {:?}", clipboard);
        }
        out
    }
}

fn position(state: &EditorState, point: &Point) -> Position {
    let line = state.document.index_of(point.key).unwrap_or_default();
    (line, point.offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_step_forms() {
        let script = Script::parse(
            r#"
steps:
  - cursor: [0, 3]
  - select: { anchor: [0, 1], focus: [1, 2] }
  - key: "ctrl+k"
  - type: "abc"
  - clipboard: "x"
  - copy
  - cut
  - paste
  - undo
  - redo
"#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Cursor((0, 3)),
                Step::Select {
                    anchor: (0, 1),
                    focus: (1, 2)
                },
                Step::Key("ctrl+k".to_string()),
                Step::Type("abc".to_string()),
                Step::Clipboard("x".to_string()),
                Step::Copy,
                Step::Cut,
                Step::Paste,
                Step::Undo,
                Step::Redo,
            ]
        );
    }

    #[test]
    fn test_json_script() {
        let script = Script::parse(r#"{"steps": [{"cursor": [1, 0]}, "paste"]}"#).unwrap();
        assert_eq!(script.steps, vec![Step::Cursor((1, 0)), Step::Paste]);
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        assert!(Script::parse("steps:\n  - scroll: 3\n").is_err());
    }

    #[test]
    fn test_missing_line_is_an_error_not_a_panic() {
        let mut session = Session::new(EditorState::from_text("one"));
        let script = Script::parse("steps:\n  - type: x\n  - cursor: [4, 0]\n").unwrap();
        let err = script.run(&mut session).unwrap_err();
        assert!(format!("{:#}", err).contains("step 2"));
        assert!(format!("{:#}", err).contains("line 4 does not exist"));
    }

    #[test]
    fn test_offsets_are_clamped() {
        let document = Document::from_text("ab");
        let point = resolve(&document, (0, 99)).unwrap();
        assert_eq!(point.offset, 2);
    }

    #[test]
    fn test_report_text() {
        let mut session = Session::new(EditorState::from_text("foo bar"));
        let script = Script::parse("steps:\n  - cursor: [0, 3]\n  - key: ctrl+k\n").unwrap();
        let steps = script.run(&mut session).unwrap();
        let report = Report::new(&mut session, steps);

        assert_eq!(report.lines, vec!["foo"]);
        assert_eq!(
            report.steps,
            vec![
                StepReport {
                    step: 1,
                    outcome: None
                },
                StepReport {
                    step: 2,
                    outcome: Some(Outcome::Handled)
                },
            ]
        );
        assert_eq!(report.to_text(), "foo\n---\nselection: (0,3) → (0,3)\n");
    }
}
