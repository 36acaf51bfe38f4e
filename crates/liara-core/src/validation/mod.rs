//! Project name and path validation
//!
//! A staged pipeline that decides whether a candidate project name and
//! location are usable: platform filename rules first, then Liara's own
//! naming conventions, then live filesystem checks. Each pipeline stops at
//! the first failing rule and reports it together with the offending
//! character or word, so the editor can show a precise message instead of
//! a generic one.

mod draft;
mod name;
mod path;

pub use draft::NewProjectDraft;
pub use name::{validate_project_name, NameError};
pub use path::{ensure_trailing_separator, validate_project_path, PathError};

use thiserror::Error;

/// First failing rule from the combined name and path pipelines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Case-insensitive substring containment; reserved words match anywhere
/// in the candidate, not just as the whole string
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(needle.to_lowercase().as_str())
}
