//! Generated output management.
//!
//! - [`FileRegistry`] - Declarative file registration, written stage by stage
//! - [`Dependencies`] - Ordered package dependency tracking
//! - [`BowerManifest`] - The `bower.json` dependency manifest

mod bower;
mod dependencies;
mod registry;

pub use bower::{BowerManifest, MainOverride};
pub use dependencies::Dependencies;
pub use registry::{FileEntry, FileRegistry, PreviewEntry, Stage, WriteStats};

/// Pretty-print a JSON document with 2-space indentation and a final newline.
pub(crate) fn pretty_json(document: &serde_json::Value) -> String {
    format!("{document:#}\n")
}
