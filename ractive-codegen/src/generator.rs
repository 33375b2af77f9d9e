//! The shape shared by the project and component generators.

use std::path::Path;

use eyre::Result;

use crate::generation::{FileRegistry, PreviewEntry, WriteStats};

/// A generator that renders a set of files into a directory.
pub trait Generator {
    /// Generator identifier (e.g., "app", "component")
    fn name(&self) -> &'static str;

    /// Register every file this generator emits
    fn files(&self) -> Result<FileRegistry>;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Result<Vec<PreviewEntry>> {
        Ok(self.files()?.preview())
    }

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        let registry = self.files()?;
        let stats = registry.write_all(output_dir)?;
        tracing::info!(
            generator = self.name(),
            written = stats.written.len(),
            skipped = stats.skipped.len(),
            "generation finished"
        );
        Ok(stats)
    }
}
