// crates/domain/src/lib.rs
//! Descriptor model: an in-memory record of a file's intended location.

#![allow(clippy::multiple_crate_versions)]

pub mod model;

pub use model::FileDescriptor;
