//! New-project draft with reactive validation
//!
//! Holds the candidate name and path for a project about to be created and
//! re-runs the full validation pipeline every time either field changes,
//! the way the editor's new-project form does.

use tracing::debug;

use super::{validate_project_name, validate_project_path, ValidationError};

/// Candidate name/path pair for a project, revalidated on every change
#[derive(Debug, Clone)]
pub struct NewProjectDraft {
    name: String,
    path: String,
    outcome: Result<(), ValidationError>,
}

impl NewProjectDraft {
    /// Create a draft and validate it immediately
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let mut draft = Self {
            name: name.into(),
            path: path.into(),
            outcome: Ok(()),
        };
        draft.revalidate();
        draft
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the candidate name and revalidate
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.revalidate();
    }

    /// Replace the candidate path and revalidate
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.revalidate();
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// First failing rule, if any
    pub fn outcome(&self) -> Result<(), ValidationError> {
        self.outcome.clone()
    }

    /// Message for the first failing rule, ready to show in the editor
    pub fn error_msg(&self) -> Option<String> {
        self.outcome.as_ref().err().map(|err| format!("Error: {err}"))
    }

    /// Run the name rules, then the path rules, keeping the first failure
    pub fn revalidate(&mut self) -> bool {
        self.outcome = validate_project_name(&self.name, &self.path)
            .map_err(ValidationError::from)
            .and_then(|()| validate_project_path(&self.path).map_err(ValidationError::from));
        if let Err(err) = &self.outcome {
            debug!(name = %self.name, path = %self.path, %err, "project draft failed validation");
        }
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_draft_revalidates_when_fields_change() {
        let dir = TempDir::new().unwrap();
        let path = format!("{}/", dir.path().display());

        let mut draft = NewProjectDraft::new("bad name", &path);
        assert!(!draft.is_valid());

        draft.set_name("GoodName");
        assert!(draft.is_valid());
        assert_eq!(draft.error_msg(), None);

        draft.set_path(format!("{}missing/", path));
        assert!(!draft.is_valid());
        assert!(matches!(draft.outcome(), Err(ValidationError::Path(_))));
    }

    #[test]
    fn test_name_failures_short_circuit_path_failures() {
        let dir = TempDir::new().unwrap();
        let mut draft =
            NewProjectDraft::new("bad name", format!("{}/missing/", dir.path().display()));
        assert!(matches!(draft.outcome(), Err(ValidationError::Name(_))));

        // Changing only the path re-runs the name rules first; the outcome
        // stays a name error while the name is still bad.
        draft.set_path(format!("{}/other/", dir.path().display()));
        assert!(matches!(draft.outcome(), Err(ValidationError::Name(_))));
    }

    #[test]
    fn test_error_msg_names_the_failing_rule() {
        let draft = NewProjectDraft::new("", "");
        let msg = draft.error_msg().unwrap();
        assert!(msg.starts_with("Error:"));
        assert!(msg.contains("empty"));
    }
}
