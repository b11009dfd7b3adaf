// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classifier;

pub use classifier::{ClassifierConfig, ExtensionTable};
