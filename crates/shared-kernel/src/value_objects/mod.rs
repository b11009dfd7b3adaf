// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod name_input;

pub use file_info::{CreatedAt, DirectoryPath, FileExtension, FileName, FileType};
pub use name_input::{DEFAULT_EXTENSION, NameInput, ResolvedName};
