//! Version value: construction, parsing, formatting, ordering

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ReleaseType, VersionParseError};

/// A Liara version number
///
/// Versions are immutable once built. Equality and ordering look at the
/// major, minor and patch numbers plus the release label; the build number
/// and the build metadata show up in the text form but never in
/// comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    build: u32,
    release_label: ReleaseType,
    build_metadata: Option<String>,
}

impl Version {
    /// Create a version with build 0, a `Custom` release label, and no
    /// build metadata
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build: 0,
            release_label: ReleaseType::Custom,
            build_metadata: None,
        }
    }

    /// Replace the build number
    pub fn with_build(mut self, build: u32) -> Self {
        self.build = build;
        self
    }

    /// Replace the release label
    pub fn with_release_label(mut self, release_label: ReleaseType) -> Self {
        self.release_label = release_label;
        self
    }

    /// Attach opaque build metadata
    pub fn with_build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
        self.build_metadata = Some(build_metadata.into());
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    pub fn release_label(&self) -> ReleaseType {
        self.release_label
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Parse a version from text
    ///
    /// The text splits on `.` and `-` into 3 to 6 components: major, minor
    /// and patch numbers, then optionally a build number, a release label,
    /// and build metadata. A missing or non-numeric build component falls
    /// back to 0 rather than failing, and a missing label defaults to
    /// `experimental`. Metadata may follow the label after a `+` (the form
    /// the formatter writes) or stand as a sixth `-`-separated component.
    pub fn parse(text: &str) -> Result<Self, VersionParseError> {
        if text.trim().is_empty() {
            return Err(VersionParseError::EmptyVersionString);
        }

        let components: Vec<&str> = text.split(['.', '-']).collect();
        if !(3..=6).contains(&components.len()) {
            return Err(VersionParseError::InvalidVersionString(components.len()));
        }

        let major = components[0]
            .parse::<u32>()
            .map_err(|_| VersionParseError::MajorInvalid(components[0].to_string()))?;
        let minor = components[1]
            .parse::<u32>()
            .map_err(|_| VersionParseError::MinorInvalid(components[1].to_string()))?;
        let patch = components[2]
            .parse::<u32>()
            .map_err(|_| VersionParseError::PatchInvalid(components[2].to_string()))?;

        // A bad build component is not an error; it falls back to 0.
        let build = components
            .get(3)
            .and_then(|c| c.parse::<u32>().ok())
            .unwrap_or(0);

        let mut release_label = ReleaseType::Experimental;
        let mut build_metadata = None;
        if let Some(component) = components.get(4) {
            let (label, trailing_metadata) = match component.split_once('+') {
                Some((label, metadata)) => (label, Some(metadata)),
                None => (*component, None),
            };
            // Metadata cannot appear both after `+` and as a sixth component.
            if trailing_metadata.is_some() && components.len() == 6 {
                return Err(VersionParseError::ReleaseLabelInvalid(
                    (*component).to_string(),
                ));
            }
            release_label = label.parse()?;
            build_metadata = trailing_metadata.map(str::to_string);
        }
        if let Some(component) = components.get(5) {
            build_metadata = Some((*component).to_string());
        }

        Ok(Self {
            major,
            minor,
            patch,
            build,
            release_label,
            build_metadata,
        })
    }

    /// Projection of the fields that take part in comparisons
    fn precedence_key(&self) -> (u32, u32, u32, ReleaseType) {
        (self.major, self.minor, self.patch, self.release_label)
    }
}

impl fmt::Display for Version {
    /// Canonical text form: `major.minor.patch.build-label`, plus
    /// `+metadata` when metadata is present and non-empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}-{}",
            self.major, self.minor, self.patch, self.build, self.release_label
        )?;
        if let Some(metadata) = self.build_metadata.as_deref() {
            if !metadata.is_empty() {
                write!(f, "+{metadata}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_key() == other.precedence_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Hashes the comparison key only, so versions that compare equal hash
    /// identically even when their build or metadata differ
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precedence_key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_key().cmp(&other.precedence_key())
    }
}
