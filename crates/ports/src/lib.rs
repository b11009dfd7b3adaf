//! # Ports
//!
//! Interface definitions for collaborators of the descriptor model.
//!
//! - [`classifier`]: mapping from a file extension to a type label
//!
//! Keeping the classifier behind a trait lets the domain stay free of any
//! particular lookup table.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classifier;

pub use classifier::TypeClassifier;
