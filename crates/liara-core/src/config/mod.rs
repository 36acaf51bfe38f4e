//! Editor configuration with file persistence

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::version::{ReleaseType, Version};

/// Editor-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Folder new projects are created in by default
    pub projects_dir: PathBuf,
    /// Author recorded on newly created projects
    pub default_author: String,
    /// Version of the editor stamped on new projects
    pub editor_version: Version,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            projects_dir: home.join("Projects"),
            default_author: env::var("USER")
                .or_else(|_| env::var("USERNAME"))
                .unwrap_or_else(|_| "unknown".to_string()),
            editor_version: Version::new(0, 0, 2)
                .with_build(1)
                .with_release_label(ReleaseType::Experimental)
                .with_build_metadata("build+2023+11+24"),
        }
    }
}

impl EditorConfig {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = env::var("LIARA_CONFIG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("liara"))
            .context("could not determine the configuration directory")
    }

    /// Location of the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Persist the config to its file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        let path = Self::config_path()?;
        let text = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, text)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }
}
