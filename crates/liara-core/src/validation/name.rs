//! Project name validation

use std::path::Path;

use thiserror::Error;

use super::contains_ignore_case;

/// Characters the platform refuses in file names; the ASCII control range
/// is checked alongside this set
const FORBIDDEN_FILE_NAME_CHARACTERS: &[char] =
    &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Characters the platform refuses anywhere in a path
const FORBIDDEN_PATH_CHARACTERS: &[char] = &['|'];

/// Punctuation Liara refuses in project names on top of the platform rules
const LIARA_FORBIDDEN_CHARACTERS: &[char] = &[
    ' ', '.', ',', ';', ':', '/', '\\', '|', '<', '>', '?', '*', '"', '\'', '[', ']', '{', '}',
    '(', ')', '!', '@', '#', '$', '%', '^', '&', '~', '`', '+', '=', '-',
];

/// Words a project name may not contain
const LIARA_RESERVED_NAMES: &[&str] = &[
    // Used by Liara itself
    "Liara", "Editor", "Template", "Engine",
    // Read as values by Liara
    "Null", "Void", "None", "Empty", "Default",
];

/// Error kinds produced when validating a project name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("the project name is empty or only whitespace")]
    NullOrWhiteSpace,

    #[error("the project name contains the character '{0}', which the platform forbids")]
    ForbiddenWindowsCharacters(char),

    #[error("the project name contains the character '{0}', which Liara forbids in project names")]
    ForbiddenLiaraCharacters(char),

    #[error("the project name contains the control character {0:?}")]
    ControlCharacters(char),

    #[error("the project name contains the reserved word '{0}'")]
    ReservedLiaraName(String),

    #[error("a file or folder named '{0}' already exists at the chosen location")]
    AlreadyUsedName(String),
}

/// Check a candidate project name against the platform's filename rules
/// and Liara's naming conventions
///
/// The rules run in a fixed order and the first failing one wins: empty
/// name, platform file-name characters, platform path characters, Liara's
/// punctuation blacklist, control characters, reserved words (matched
/// case-insensitively anywhere in the name), and finally whether the name
/// is already taken at `path`. The existence check looks at the raw
/// concatenation of `path` and `name`, so callers supply the path with its
/// trailing separator.
pub fn validate_project_name(name: &str, path: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::NullOrWhiteSpace);
    }

    if let Some(c) = name
        .chars()
        .find(|c| FORBIDDEN_FILE_NAME_CHARACTERS.contains(c) || c.is_ascii_control())
    {
        return Err(NameError::ForbiddenWindowsCharacters(c));
    }

    if let Some(c) = name
        .chars()
        .find(|c| FORBIDDEN_PATH_CHARACTERS.contains(c) || c.is_ascii_control())
    {
        return Err(NameError::ForbiddenWindowsCharacters(c));
    }

    if let Some(c) = name.chars().find(|c| LIARA_FORBIDDEN_CHARACTERS.contains(c)) {
        return Err(NameError::ForbiddenLiaraCharacters(c));
    }

    if let Some(c) = name.chars().find(|c| c.is_control()) {
        return Err(NameError::ControlCharacters(c));
    }

    if let Some(word) = LIARA_RESERVED_NAMES
        .iter()
        .find(|word| contains_ignore_case(name, word))
    {
        return Err(NameError::ReservedLiaraName((*word).to_string()));
    }

    let candidate = format!("{path}{name}");
    if Path::new(&candidate).exists() {
        return Err(NameError::AlreadyUsedName(name.to_string()));
    }

    Ok(())
}
