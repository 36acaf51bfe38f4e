//! Project and scene entities

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// File extension of a serialized Liara project
pub const PROJECT_FILE_EXTENSION: &str = ".liaraproj";

/// Name of the scene every new project starts with
const DEFAULT_SCENE_NAME: &str = "Default_Scene";

/// Error kinds for invalid scene names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("a scene name cannot be empty or whitespace")]
    EmptyName,

    #[error("a scene name cannot contain spaces")]
    NameContainsSpaces,
}

/// A named scene inside a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    name: String,
}

impl Scene {
    /// Create a scene; the name must be non-empty and space-free
    pub fn new(name: impl Into<String>) -> Result<Self, SceneError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SceneError::EmptyName);
        }
        if name.contains(' ') {
            return Err(SceneError::NameContainsSpaces);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A Liara project on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name, also the name of the project folder
    pub name: String,
    /// Folder the project folder lives in
    pub path: String,
    /// Author recorded at creation time
    pub author: String,
    /// Editor version the project was created with
    pub liara_version: Version,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    scenes: Vec<Scene>,
}

impl Project {
    /// Create a project with the default starting scene
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        author: impl Into<String>,
        liara_version: Version,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            author: author.into(),
            liara_version,
            created_at: Utc::now(),
            scenes: vec![Scene {
                name: DEFAULT_SCENE_NAME.to_string(),
            }],
        }
    }

    /// Folder holding the project's contents
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::from(&self.path).join(&self.name)
    }

    /// Location of the project file inside the project folder
    pub fn project_file(&self) -> PathBuf {
        self.root_dir()
            .join(format!("{}{}", self.name, PROJECT_FILE_EXTENSION))
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Add a scene to the project
    pub fn add_scene(&mut self, name: impl Into<String>) -> Result<(), SceneError> {
        self.scenes.push(Scene::new(name)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_projects_start_with_the_default_scene() {
        let project = Project::new("Game", "/tmp/", "someone", Version::new(0, 0, 2));
        assert_eq!(project.scenes().len(), 1);
        assert_eq!(project.scenes()[0].name(), "Default_Scene");
    }

    #[test]
    fn test_project_file_location() {
        let project = Project::new("Game", "/projects/", "someone", Version::new(0, 0, 2));
        assert_eq!(
            project.project_file(),
            PathBuf::from("/projects/Game/Game.liaraproj")
        );
    }

    #[test]
    fn test_scene_names_are_validated() {
        assert!(Scene::new("Level_1").is_ok());
        assert_eq!(Scene::new(" "), Err(SceneError::EmptyName));
        assert_eq!(Scene::new("Level 1"), Err(SceneError::NameContainsSpaces));
    }

    #[test]
    fn test_add_scene() {
        let mut project = Project::new("Game", "/tmp/", "someone", Version::new(0, 0, 2));
        project.add_scene("Level_1").unwrap();
        assert_eq!(project.scenes().len(), 2);
        assert_eq!(
            project.add_scene("bad name"),
            Err(SceneError::NameContainsSpaces)
        );
    }
}
