//! # filedesc
//!
//! In-memory file descriptors: where a file would live, what it is called,
//! and what kind of file its extension suggests. Nothing is read from or
//! written to disk.
//!
//! ```
//! use filedesc::{ExtensionTable, FileDescriptor};
//!
//! let table = ExtensionTable::builtin();
//! let mut file = FileDescriptor::new("C:\\Users\\Maestro\\", "Maestro.txt", &table)?;
//! assert_eq!(file.path(), "C:/Users/Maestro/Maestro.txt");
//!
//! file.move_to("D:\\Archive\\");
//! assert_eq!(file.path(), "D:/Archive/Maestro.txt");
//! # Ok::<(), filedesc::DomainError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub use filedesc_domain::FileDescriptor;
pub use filedesc_infra::{ClassifierConfig, ExtensionTable};
pub use filedesc_ports::TypeClassifier;
pub use filedesc_shared_kernel::{
    CreatedAt, DirectoryPath, DomainError, DomainResult, ErrorContext, FileDescError, FileExtension,
    FileName, FileType, InfraResult, InfrastructureError, NameInput, ResolvedName, Result, path,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
