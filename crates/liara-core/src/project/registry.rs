//! Recent-projects registry
//!
//! A JSON file in the user's data directory remembering which projects
//! were opened and when, newest first. Entries whose project folder no
//! longer exists are dropped when the registry loads.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::project::PROJECT_FILE_EXTENSION;

/// Registry file name inside the data directory
const REGISTRY_FILE_NAME: &str = "projects.json";

/// One remembered project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    pub name: String,
    pub path: String,
    pub last_opened: DateTime<Utc>,
}

impl ProjectData {
    /// Folder holding the project's contents
    pub fn root_dir(&self) -> PathBuf {
        Path::new(&self.path).join(&self.name)
    }

    /// Location of the project file this entry points at
    pub fn full_path(&self) -> PathBuf {
        self.root_dir()
            .join(format!("{}{}", self.name, PROJECT_FILE_EXTENSION))
    }
}

/// Recently opened projects, newest first
#[derive(Debug)]
pub struct ProjectRegistry {
    file: PathBuf,
    entries: Vec<ProjectData>,
}

impl ProjectRegistry {
    /// Default registry location under the user's data directory
    pub fn default_file() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("could not determine the data directory".to_string()))?;
        Ok(dir.join("liara").join(REGISTRY_FILE_NAME))
    }

    /// Load the registry at the default location
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_file()?)
    }

    /// Load a registry file, dropping entries whose project folder is gone
    pub fn load(file: PathBuf) -> Result<Self> {
        let mut entries: Vec<ProjectData> = if file.exists() {
            serde_json::from_str(&fs::read_to_string(&file)?)?
        } else {
            Vec::new()
        };
        let before = entries.len();
        entries.retain(|entry| entry.root_dir().is_dir());
        if entries.len() < before {
            debug!(dropped = before - entries.len(), "dropped stale registry entries");
        }
        entries.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
        Ok(Self { file, entries })
    }

    pub fn entries(&self) -> &[ProjectData] {
        &self.entries
    }

    /// Stamp a project as opened now, adding it if unknown, and persist
    pub fn record_opened(&mut self, name: &str, path: &str) -> Result<()> {
        let now = Utc::now();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name == name && entry.path == path)
        {
            Some(entry) => entry.last_opened = now,
            None => self.entries.push(ProjectData {
                name: name.to_string(),
                path: path.to_string(),
                last_opened: now,
            }),
        }
        self.entries.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}
