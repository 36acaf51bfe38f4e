//! Project creation
//!
//! Validates a candidate name/path pair, then lays out the project folder
//! skeleton. The project file itself is written later by the editor shell.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::project::Project;
use crate::validation::NewProjectDraft;

/// Folders laid out inside every new project
const PROJECT_FOLDERS: &[&str] = &["Content", "Scripts", "Misc", "Misc/Icons", "Misc/Preview"];

/// Dot-folders laid out inside every new project
const HIDDEN_FOLDERS: &[&str] = &[".liara"];

/// Validate and create a project folder under `path`
///
/// Runs the full name and path pipeline first; any failure aborts the
/// creation and surfaces the failing rule. Validation and creation are
/// separate filesystem operations, so the folder can still change in
/// between.
pub fn create_project(name: &str, path: &str, config: &EditorConfig) -> Result<Project> {
    let draft = NewProjectDraft::new(name, path);
    draft.outcome()?;

    let root = Path::new(path).join(name);
    fs::create_dir_all(&root)?;
    for folder in PROJECT_FOLDERS {
        fs::create_dir_all(root.join(folder))?;
    }
    for folder in HIDDEN_FOLDERS {
        fs::create_dir_all(root.join(folder))?;
    }
    info!(project = name, path = %root.display(), "created project skeleton");

    Ok(Project::new(
        name,
        path,
        config.default_author.as_str(),
        config.editor_version.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::error::Error;
    use crate::validation::{NameError, ValidationError};

    #[test]
    fn test_create_project_lays_out_the_skeleton() {
        let dir = TempDir::new().unwrap();
        let path = format!("{}/", dir.path().display());
        let config = EditorConfig::default();

        let project = create_project("Game01", &path, &config).unwrap();

        let root = dir.path().join("Game01");
        assert!(root.is_dir());
        for folder in ["Content", "Scripts", "Misc/Icons", "Misc/Preview", ".liara"] {
            assert!(root.join(folder).is_dir(), "missing folder {folder}");
        }
        assert_eq!(project.name, "Game01");
        assert_eq!(project.author, config.default_author);
        assert_eq!(project.scenes().len(), 1);
    }

    #[test]
    fn test_create_project_rejects_invalid_drafts() {
        let config = EditorConfig::default();
        let err = create_project("bad name", "/nonexistent/", &config).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!Path::new("/nonexistent/bad name").exists());
    }

    #[test]
    fn test_create_project_rejects_names_already_in_use() {
        let dir = TempDir::new().unwrap();
        let path = format!("{}/", dir.path().display());
        let config = EditorConfig::default();

        create_project("Game01", &path, &config).unwrap();
        let err = create_project("Game01", &path, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Name(NameError::AlreadyUsedName(_)))
        ));
    }
}
