// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileDescError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileDescError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, FileDescError>;

/// Errors raised while building or mutating a descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Stored descriptor fields that disagree with each other.
    #[error("Inconsistent descriptor for '{path}': {reason}")]
    InconsistentDescriptor { path: String, reason: String },
}

impl DomainError {
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into(), reason: reason.into() }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised by adapters (configuration loading, serialization).
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Invalid extension mapping '{key}': {reason}")]
    InvalidMapping { key: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for FileDescError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FileDescError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for FileDescError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileDescError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileDescError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileDescError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
