// crates/domain/src/model/entities.rs
pub mod file_descriptor;

pub use file_descriptor::FileDescriptor;
