//! Release maturity labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VersionParseError;

/// Maturity label carried by a [`Version`](super::Version)
///
/// Declaration order is precedence order: `Experimental` compares lowest
/// and `Custom` highest, and that order is the final tie-breaker between
/// otherwise identical versions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Not stable
    #[default]
    Experimental,
    /// Stable enough to be released
    Alpha,
    /// More stable than experimental, not ready for release
    Beta,
    /// Stable
    Stable,
    /// Long term support
    Lts,
    /// No longer supported
    Obsolete,
    /// Third-party release; the build metadata names the modification
    Custom,
}

impl ReleaseType {
    /// Lowercase name used in the text form of a version
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Stable => "stable",
            Self::Lts => "lts",
            Self::Obsolete => "obsolete",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = VersionParseError;

    /// Label names match case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "experimental" => Ok(Self::Experimental),
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            "stable" => Ok(Self::Stable),
            "lts" => Ok(Self::Lts),
            "obsolete" => Ok(Self::Obsolete),
            "custom" => Ok(Self::Custom),
            _ => Err(VersionParseError::ReleaseLabelInvalid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_ordered_by_declaration() {
        assert!(ReleaseType::Experimental < ReleaseType::Alpha);
        assert!(ReleaseType::Alpha < ReleaseType::Beta);
        assert!(ReleaseType::Beta < ReleaseType::Stable);
        assert!(ReleaseType::Stable < ReleaseType::Lts);
        assert!(ReleaseType::Lts < ReleaseType::Obsolete);
        assert!(ReleaseType::Obsolete < ReleaseType::Custom);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("alpha".parse::<ReleaseType>().unwrap(), ReleaseType::Alpha);
        assert_eq!("Alpha".parse::<ReleaseType>().unwrap(), ReleaseType::Alpha);
        assert_eq!("LTS".parse::<ReleaseType>().unwrap(), ReleaseType::Lts);
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert_eq!(
            "nightly".parse::<ReleaseType>(),
            Err(VersionParseError::ReleaseLabelInvalid("nightly".to_string()))
        );
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(ReleaseType::Experimental.to_string(), "experimental");
        assert_eq!(ReleaseType::Lts.to_string(), "lts");
    }
}
