//! Core utilities for the Ractive project generator.
//!
//! This crate provides the file emission primitives and naming helpers
//! shared by the configuration, generation and CLI crates.

mod file;
mod naming;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming helpers
pub use naming::{camelize, classify, slugify};
