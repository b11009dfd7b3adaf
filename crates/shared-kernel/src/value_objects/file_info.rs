// crates/shared-kernel/src/value_objects/file_info.rs
use std::{fmt, ops::Deref};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::path::normalize_directory;

/// Parent directory of a descriptor, always in normalized form.
///
/// Construction goes through [`normalize_directory`], so the inner string never
/// holds a backslash and never ends in `/`. Deserialization normalizes as well.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DirectoryPath(String);

impl DirectoryPath {
    pub fn new(raw: &str) -> Self {
        Self(normalize_directory(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins a file name below this directory with a single `/`.
    pub fn join(&self, name: &FileName) -> String {
        format!("{}/{}", self.0, name.as_str())
    }
}

impl From<String> for DirectoryPath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for DirectoryPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<DirectoryPath> for String {
    fn from(dir: DirectoryPath) -> Self {
        dir.0
    }
}

impl AsRef<str> for DirectoryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for DirectoryPath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full file name including the extension, e.g. `Maestro.txt`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text after the last `.` of a file name, kept exactly as written.
///
/// May be empty when the name ends with a dot. Case folding is left to the
/// classifier so that `fullName == baseName + "." + extension` survives.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl Into<String>) -> Self {
        Self(ext.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for FileExtension {
    fn from(ext: String) -> Self {
        Self::new(ext)
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

impl AsRef<str> for FileExtension {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human readable type label produced by a classifier, e.g. `Text Document`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileType(String);

impl FileType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FileType {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&str> for FileType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct CreatedAt(DateTime<Local>);

impl CreatedAt {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl From<DateTime<Local>> for CreatedAt {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
