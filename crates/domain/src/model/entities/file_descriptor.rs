// crates/domain/src/model/entities/file_descriptor.rs
use std::fmt;

use filedesc_ports::TypeClassifier;
use filedesc_shared_kernel::{
    CreatedAt, DirectoryPath, DomainError, DomainResult, FileExtension, FileName, FileType, NameInput,
    ResolvedName,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// In-memory description of where a file would live and what it is called.
///
/// Nothing here touches the disk. Derived fields (`file_type`, `path`) are
/// recomputed by every mutator so that the following always hold:
///
/// - `full_name == base_name + "." + extension`
/// - `path == directory + "/" + full_name`
/// - `file_type` is the classifier's label for `extension`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorRecord")]
pub struct FileDescriptor {
    directory: DirectoryPath,
    full_name: FileName,
    base_name: String,
    extension: FileExtension,
    file_type: FileType,
    path: String,
    created_at: CreatedAt,
}

impl FileDescriptor {
    /// Builds a descriptor stamped with the current local time.
    pub fn new<C>(directory: &str, name: impl Into<NameInput>, classifier: &C) -> DomainResult<Self>
    where
        C: TypeClassifier + ?Sized,
    {
        Self::new_at(directory, name, classifier, CreatedAt::now())
    }

    /// Builds a descriptor with an explicit creation timestamp.
    pub fn new_at<C>(
        directory: &str,
        name: impl Into<NameInput>,
        classifier: &C,
        created_at: CreatedAt,
    ) -> DomainResult<Self>
    where
        C: TypeClassifier + ?Sized,
    {
        let directory = DirectoryPath::new(directory);
        let ResolvedName { full_name, base_name, extension } = name.into().resolve()?;
        let file_type = classifier.classify(extension.as_str());
        let path = directory.join(&full_name);
        debug!(%path, file_type = %file_type, "created file descriptor");

        Ok(Self { directory, full_name, base_name, extension, file_type, path, created_at })
    }

    /// Replaces the name, keeping the directory and creation time.
    ///
    /// On error the descriptor is left as it was.
    pub fn rename<C>(&mut self, name: impl Into<NameInput>, classifier: &C) -> DomainResult<()>
    where
        C: TypeClassifier + ?Sized,
    {
        let ResolvedName { full_name, base_name, extension } = name.into().resolve()?;
        let file_type = classifier.classify(extension.as_str());
        let path = self.directory.join(&full_name);

        let previous = std::mem::replace(&mut self.path, path);
        self.file_type = file_type;
        self.full_name = full_name;
        self.base_name = base_name;
        self.extension = extension;
        debug!(%previous, path = %self.path, "renamed file descriptor");
        Ok(())
    }

    /// Points the descriptor at a new directory, keeping the name.
    pub fn move_to(&mut self, directory: &str) {
        let directory = DirectoryPath::new(directory);
        let previous = std::mem::replace(&mut self.path, directory.join(&self.full_name));
        self.directory = directory;
        debug!(%previous, path = %self.path, "moved file descriptor");
    }

    pub fn directory(&self) -> &DirectoryPath {
        &self.directory
    }

    pub fn full_name(&self) -> &FileName {
        &self.full_name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> &FileExtension {
        &self.extension
    }

    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn created_at(&self) -> CreatedAt {
        self.created_at
    }
}

impl fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Wire shape of a stored descriptor, checked before it becomes a [`FileDescriptor`].
#[derive(Deserialize)]
struct DescriptorRecord {
    directory: DirectoryPath,
    full_name: FileName,
    base_name: String,
    extension: FileExtension,
    file_type: FileType,
    path: String,
    created_at: CreatedAt,
}

impl TryFrom<DescriptorRecord> for FileDescriptor {
    type Error = DomainError;

    fn try_from(record: DescriptorRecord) -> Result<Self, Self::Error> {
        let resolved = NameInput::parts(record.base_name.as_str(), record.extension.as_str()).resolve()?;
        if resolved.full_name != record.full_name {
            return Err(DomainError::InconsistentDescriptor {
                path: record.path,
                reason: format!(
                    "full name '{}' does not match '{}'",
                    record.full_name, resolved.full_name
                ),
            });
        }
        let expected = record.directory.join(&record.full_name);
        if record.path != expected {
            return Err(DomainError::InconsistentDescriptor {
                path: record.path,
                reason: format!("expected path '{expected}'"),
            });
        }

        Ok(Self {
            directory: record.directory,
            full_name: record.full_name,
            base_name: record.base_name,
            extension: record.extension,
            file_type: record.file_type,
            path: record.path,
            created_at: record.created_at,
        })
    }
}
