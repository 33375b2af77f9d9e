//! Core operations.
//!
//! This module contains the business logic for ractive commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod install;

pub use generate::{GenerateOptions, generate};
