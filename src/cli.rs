//! Command-line interface: replay a script against a document
//!
//! ```text
//! queryline [--config FILE] [--keymap FILE] [--clipboard memory|system]
//!           [--format json|text] [--save-config] <DOCUMENT> <SCRIPT>
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::clipboard::ClipboardBackend;
use crate::config::EditorConfig;
use crate::editable::{Document, EditorState};
use crate::keymap::{load_default_keymap, load_keymap_file, merge_bindings, Keymap};
use crate::script::{Report, Script};
use crate::session::Session;
use crate::util::check_input_file;

/// Replay editing scripts against a query document
#[derive(Parser, Debug)]
#[command(name = "queryline", version, about = "Replay editing scripts against a query document")]
pub struct CliArgs {
    /// Document to edit (one line per block)
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Replay script (YAML or JSON)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of ~/.config/queryline/config.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra keymap merged over the default and user keymaps
    #[arg(long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Override the configured clipboard backend
    #[arg(long, value_enum)]
    pub clipboard: Option<ClipboardArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub save_config: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardArg {
    System,
    Memory,
}

impl From<ClipboardArg> for ClipboardBackend {
    fn from(arg: ClipboardArg) -> Self {
        match arg {
            ClipboardArg::System => ClipboardBackend::System,
            ClipboardArg::Memory => ClipboardBackend::Memory,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Everything a replay needs, resolved from the CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub document: PathBuf,
    pub script: PathBuf,
    pub editor: EditorConfig,
    pub keymap: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Resolve arguments and configuration files into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        for path in [&self.document, &self.script] {
            check_input_file(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        }

        let mut editor = match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::load(),
        };
        if let Some(clipboard) = self.clipboard {
            editor.clipboard = clipboard.into();
        }
        if self.save_config {
            match &self.config {
                Some(path) => editor.save_to(path)?,
                None => editor.save()?,
            }
        }

        Ok(RunConfig {
            document: self.document,
            script: self.script,
            editor,
            keymap: self.keymap,
            format: self.format,
        })
    }
}

/// Load a document file. A single trailing newline ends the last line rather
/// than starting an empty one.
pub fn load_document(source: &str) -> Document {
    let text = source.strip_suffix('\n').unwrap_or(source);
    Document::from_text(text)
}

/// Run a replay and render the final report
pub fn run(config: &RunConfig) -> Result<String> {
    let source = std::fs::read_to_string(&config.document)
        .with_context(|| format!("Failed to read document {}", config.document.display()))?;
    let script = Script::load(&config.script)?;

    let mut bindings = load_default_keymap();
    if let Some(path) = &config.keymap {
        let overrides = load_keymap_file(path)
            .with_context(|| format!("Failed to load keymap {}", path.display()))?;
        bindings = merge_bindings(bindings, overrides);
    }

    let state = EditorState::new(load_document(&source));
    let mut session = Session::from_config(state, &config.editor, Keymap::with_bindings(bindings));
    tracing::info!(plugins = ?session.plugins().names(), "replaying {}", config.script.display());

    let steps = script.run(&mut session)?;
    let report = Report::new(&mut session, steps);

    match config.format {
        OutputFormat::Json => Ok(report.to_json()? + "\n"),
        OutputFormat::Text => Ok(report.to_text()),
    }
}
