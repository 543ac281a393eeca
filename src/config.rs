//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/inkpad/config.yaml`

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the save dialog starts in for untitled documents.
    /// `None` leaves the choice to the platform dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_save_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update the default save directory and persist
    pub fn set_default_save_dir(&mut self, dir: Option<PathBuf>) -> anyhow::Result<()> {
        self.default_save_dir = dir;
        self.save()
    }
}
