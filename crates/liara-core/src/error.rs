//! Error types for Liara

use thiserror::Error;

use crate::project::SceneError;
use crate::validation::{NameError, PathError, ValidationError};
use crate::version::VersionParseError;

/// Result type alias using Liara's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Umbrella error for the Liara core library
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    VersionParse(#[from] VersionParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Self::Validation(ValidationError::Name(err))
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_convert_into_the_umbrella_error() {
        let err: Error = NameError::NullOrWhiteSpace.into();
        assert!(matches!(err, Error::Validation(ValidationError::Name(_))));

        let err: Error = PathError::PathDoesNotExist.into();
        assert!(matches!(err, Error::Validation(ValidationError::Path(_))));

        let err: Error = SceneError::EmptyName.into();
        assert!(matches!(err, Error::Scene(_)));
    }

    #[test]
    fn test_messages_surface_the_failing_detail() {
        let err: Error = VersionParseError::ReleaseLabelInvalid("nightly".to_string()).into();
        assert!(err.to_string().contains("nightly"));

        let err: Error = NameError::ReservedLiaraName("Engine".to_string()).into();
        assert!(err.to_string().contains("Engine"));
    }
}
