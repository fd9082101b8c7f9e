//! Plain-text clipboard access
//!
//! The session reads the clipboard before dispatching a paste and writes it
//! after a copy or cut. Only the plain-text flavour is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A plain-text clipboard
pub trait Clipboard {
    /// Current clipboard text. `None` when empty or unavailable.
    fn read_text(&mut self) -> Option<String>;

    /// Replace the clipboard contents
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Which clipboard implementation a session uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardBackend {
    /// The platform clipboard
    #[default]
    System,
    /// An in-process buffer (headless runs, tests)
    Memory,
}

impl ClipboardBackend {
    pub fn open(self) -> Box<dyn Clipboard> {
        match self {
            ClipboardBackend::System => Box::new(SystemClipboard),
            ClipboardBackend::Memory => Box::new(MemoryClipboard::default()),
        }
    }
}

/// Platform clipboard via `arboard`.
///
/// A handle is opened per call; some platforms invalidate long-lived
/// handles when another application takes ownership.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Option<String> {
        match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("Clipboard read failed: {}", e);
                None
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to write system clipboard")?;
        Ok(())
    }
}

/// In-memory clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_roundtrip() {
        let mut cb = MemoryClipboard::default();
        assert_eq!(cb.read_text(), None);
        cb.write_text("select 1").unwrap();
        assert_eq!(cb.read_text().as_deref(), Some("select 1"));
    }

    #[test]
    fn test_backend_deserializes_snake_case() {
        let backend: ClipboardBackend = serde_yaml::from_str("memory").unwrap();
        assert_eq!(backend, ClipboardBackend::Memory);
        assert_eq!(ClipboardBackend::default(), ClipboardBackend::System);
    }
}
