//! Tracing setup and selection diagnostics
//!
//! Configure via RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - only per-event selection diffs
//! - `RUST_LOG=queryline::plugins=trace` - plugin dispatch
//!
//! Logs are also written to `~/.config/queryline/logs/queryline.log` with
//! daily rotation, at debug level.

use std::fmt;

use tracing_subscriber::{fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{EditorState, Point};

/// Initialize the tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = tracing_fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "queryline.log");
            Some(
                tracing_fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the selection for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub anchor: (usize, usize),
    pub focus: (usize, usize),
    pub collapsed: bool,
    pub block_count: usize,
}

impl SelectionSnapshot {
    pub fn from_state(state: &EditorState) -> Self {
        let locate = |point: &Point| {
            (
                state.document.index_of(point.key).unwrap_or(usize::MAX),
                point.offset,
            )
        };
        Self {
            anchor: locate(&state.selection.anchor),
            focus: locate(&state.selection.focus),
            collapsed: state.selection.is_collapsed(),
            block_count: state.document.block_count(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.block_count != other.block_count {
            changes.push(format!(
                "blocks: {} → {}",
                self.block_count, other.block_count
            ));
        }
        if self.anchor != other.anchor {
            changes.push(format!("anchor: {} → {}", Pos(self.anchor), Pos(other.anchor)));
        }
        if self.focus != other.focus {
            changes.push(format!("focus: {} → {}", Pos(self.focus), Pos(other.focus)));
        }
        if self.collapsed != other.collapsed {
            let status = if other.collapsed { "collapsed" } else { "expanded" };
            changes.push(format!("selection {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

struct Pos((usize, usize));

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0 .0, self.0 .1)
    }
}
