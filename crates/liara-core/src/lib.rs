//! Liara Core Library
//!
//! This is the shared core for the Liara editor, containing:
//! - Version identifiers (parsing, formatting, ordering)
//! - Project name and path validation
//! - Project entities and creation
//! - The recent-projects registry
//! - Editor configuration

pub mod config;
pub mod error;
pub mod project;
pub mod validation;
pub mod version;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::EditorConfig;
    pub use crate::error::{Error, Result};
    pub use crate::validation::{NewProjectDraft, ValidationError};
    pub use crate::version::{ReleaseType, Version};
}
