//! File generation for the Ractive project generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building (CodeBuilder)
//! - [`generation`] - Output management (FileRegistry, Dependencies, BowerManifest)
//! - [`files`] - One renderer per scaffolded project file
//! - [`component`] - The component generator and its files
//! - [`project`] - The project generator

pub mod builder;
pub mod component;
pub mod files;
pub mod generation;
mod generator;
pub mod project;

pub use component::{ComponentGenerator, ComponentSpec};
pub use generator::Generator;
pub use project::{ProjectGenerator, ProjectOptions};
