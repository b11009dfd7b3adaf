// crates/shared-kernel/src/value_objects/name_input.rs
use serde::{Deserialize, Serialize};

use super::file_info::{FileExtension, FileName};
use crate::error::{DomainError, DomainResult};

/// Extension assumed for names written without any dot.
pub const DEFAULT_EXTENSION: &str = "txt";

/// A file name as supplied by a caller: either combined or already split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameInput {
    /// `Maestro.txt`
    Full(String),
    /// `{ base_name: "Maestro", extension: "txt" }`
    Parts { base_name: String, extension: String },
}

impl NameInput {
    pub fn full(name: impl Into<String>) -> Self {
        Self::Full(name.into())
    }

    pub fn parts(base_name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::Parts { base_name: base_name.into(), extension: extension.into() }
    }

    /// Decomposes the input into full name, base name and extension.
    ///
    /// The combined form splits on the last `.`. Without a dot the whole input
    /// becomes the base name and [`DEFAULT_EXTENSION`] is appended. A leading
    /// dot (`.gitignore`) yields an empty base name; a trailing dot (`notes.`)
    /// yields an empty extension.
    pub fn resolve(&self) -> DomainResult<ResolvedName> {
        match self {
            Self::Full(name) => {
                if name.is_empty() {
                    return Err(DomainError::invalid_name(name, "name must not be empty"));
                }
                Ok(match name.rfind('.') {
                    None => ResolvedName {
                        full_name: FileName::new(format!("{name}.{DEFAULT_EXTENSION}")),
                        base_name: name.clone(),
                        extension: FileExtension::new(DEFAULT_EXTENSION),
                    },
                    Some(_) if name == "." => {
                        return Err(DomainError::invalid_name(
                            name,
                            "base name and extension must not both be empty",
                        ));
                    }
                    Some(dot) => ResolvedName {
                        full_name: FileName::new(name.clone()),
                        base_name: name[..dot].to_string(),
                        extension: FileExtension::new(&name[dot + 1..]),
                    },
                })
            }
            Self::Parts { base_name, extension } => {
                if base_name.is_empty() && extension.is_empty() {
                    return Err(DomainError::invalid_name(
                        ".",
                        "base name and extension must not both be empty",
                    ));
                }
                Ok(ResolvedName {
                    full_name: FileName::new(format!("{base_name}.{extension}")),
                    base_name: base_name.clone(),
                    extension: FileExtension::new(extension.as_str()),
                })
            }
        }
    }
}

impl From<&str> for NameInput {
    fn from(name: &str) -> Self {
        Self::full(name)
    }
}

impl From<String> for NameInput {
    fn from(name: String) -> Self {
        Self::Full(name)
    }
}

impl From<(&str, &str)> for NameInput {
    fn from((base_name, extension): (&str, &str)) -> Self {
        Self::parts(base_name, extension)
    }
}

impl From<(String, String)> for NameInput {
    fn from((base_name, extension): (String, String)) -> Self {
        Self::Parts { base_name, extension }
    }
}

/// Output of [`NameInput::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub full_name: FileName,
    pub base_name: String,
    pub extension: FileExtension,
}
