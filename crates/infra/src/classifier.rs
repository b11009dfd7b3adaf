// crates/infra/src/classifier.rs
//! Extension based type labelling.

pub mod config;
pub mod table;

pub use config::ClassifierConfig;
pub use table::ExtensionTable;
