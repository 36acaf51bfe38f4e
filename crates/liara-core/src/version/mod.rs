//! Version identifiers for the Liara editor
//!
//! A version reads `major.minor.patch.build-label+metadata`, for example
//! `1.2.3.4-alpha+build123`. The three leading numbers and the release
//! label decide ordering and equality; the build number and the metadata
//! are carried along for display only.

mod release;
mod value;

pub use release::ReleaseType;
pub use value::Version;

use thiserror::Error;

/// Error kinds produced when parsing a version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("the version string is empty")]
    EmptyVersionString,

    #[error("a version string has 3 to 6 components, found {0}")]
    InvalidVersionString(usize),

    #[error("'{0}' is not a valid major version number")]
    MajorInvalid(String),

    #[error("'{0}' is not a valid minor version number")]
    MinorInvalid(String),

    #[error("'{0}' is not a valid patch version number")]
    PatchInvalid(String),

    #[error("'{0}' is not a known release label")]
    ReleaseLabelInvalid(String),
}
