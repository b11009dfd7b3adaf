// crates/domain/src/model.rs
pub mod entities;

pub use entities::FileDescriptor;
