//! Editor configuration persistence
//!
//! Stores preferences in `~/.config/queryline/config.yaml`:
//!
//! ```yaml
//! plugins: [newline, clear, selection_shortcuts, clipboard]
//! history_size: 100
//! clipboard: system
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardBackend;
use crate::editable::DEFAULT_HISTORY_SIZE;
use crate::plugins::PluginKind;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Plugin chain, in dispatch order
    #[serde(default = "default_plugins")]
    pub plugins: Vec<PluginKind>,
    /// Maximum undo steps kept
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    #[serde(default)]
    pub clipboard: ClipboardBackend,
}

fn default_plugins() -> Vec<PluginKind> {
    PluginKind::DEFAULT_ORDER.to_vec()
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            history_size: default_history_size(),
            clipboard: ClipboardBackend::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
