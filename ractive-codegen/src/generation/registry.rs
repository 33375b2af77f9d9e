//! File registration for declarative, staged generation.
//!
//! Generators register every file they emit, then the registry writes them
//! stage by stage. A failed write aborts the remaining stages.
//!
//! # Example
//!
//! ```
//! use ractive_gen_codegen::generation::{FileEntry, FileRegistry, Stage};
//!
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::new("test/app_test.js", "", Stage::Tests));
//! registry.register(FileEntry::new("app/index.html", "", Stage::App));
//!
//! let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
//! assert_eq!(paths, ["app/index.html", "test/app_test.js"]);
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use ractive_gen_core::{File, FileRules, GeneratedFile, Overwrite, WriteResult};

/// Generation stage, determining write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Application markup, scripts and styles.
    App,
    /// Static project files (editor config, ignore rules, build config).
    Project,
    /// Dependency manifests.
    Dependencies,
    /// Test scaffolding.
    Tests,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::App => "app",
            Stage::Project => "project files",
            Stage::Dependencies => "dependencies",
            Stage::Tests => "tests",
        }
    }
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from output directory, `/`-separated.
    pub path: String,
    /// File content.
    pub content: String,
    /// Stage the file is written in.
    pub stage: Stage,
    /// Overwrite behavior.
    pub overwrite: Overwrite,
}

impl FileEntry {
    /// Create a new file entry, always overwritten.
    pub fn new(path: impl Into<String>, content: impl Into<String>, stage: Stage) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            stage,
            overwrite: Overwrite::Always,
        }
    }

    /// Create from a GeneratedFile, respecting its rules.
    pub fn from_generated<F: GeneratedFile>(file: &F, stage: Stage) -> Self {
        let path = file
            .relative_path()
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(path, file.render(), stage).with_overwrite(file.rules().overwrite)
    }

    /// Override the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the full path for this entry.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path.split('/').fold(base.to_path_buf(), |p, part| p.join(part))
    }

    /// Write this file to disk.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.full_path(base), self.content.as_str())
            .with_rules(FileRules {
                overwrite: self.overwrite,
            })
            .write()
    }
}

/// Registry for collecting generated files.
///
/// Files are written in stage order: App -> Project -> Dependencies -> Tests.
/// Within a stage, registration order is kept.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Register a GeneratedFile in `stage`.
    pub fn register_file<F: GeneratedFile>(&mut self, file: &F, stage: Stage) {
        self.register(FileEntry::from_generated(file, stage));
    }

    /// Get all registered entries, sorted by stage.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.stage);
        sorted.into_iter()
    }

    /// Get entries for a specific stage.
    pub fn entries_in(&self, stage: Stage) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.stage == stage)
    }

    /// Look up an entry by relative path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Check whether a file is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                stage: e.stage,
            })
            .collect()
    }

    /// Write all files to the output directory.
    ///
    /// Files are written in stage order. Returns statistics about what was written.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();
        let mut current = None;

        for entry in self.entries() {
            if current != Some(entry.stage) {
                tracing::debug!(stage = entry.stage.as_str(), "starting stage");
                current = Some(entry.stage);
            }

            let result = entry
                .write(base)
                .wrap_err_with(|| format!("stage '{}' failed", entry.stage.as_str()))?;
            match result {
                WriteResult::Written => stats.written.push(entry.path.clone()),
                WriteResult::Skipped => stats.skipped.push(entry.path.clone()),
            }
        }

        Ok(stats)
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Relative path from output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// Stage the file belongs to.
    pub stage: Stage,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Paths of written files.
    pub written: Vec<String>,
    /// Paths of skipped files (already existed).
    pub skipped: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Marker;

    impl GeneratedFile for Marker {
        fn relative_path(&self) -> PathBuf {
            PathBuf::from("app").join("scripts").join("marker.js")
        }

        fn rules(&self) -> FileRules {
            FileRules::create_once()
        }

        fn render(&self) -> String {
            "// marker\n".to_string()
        }
    }

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("test/app_test.js", "", Stage::Tests));
        registry.register(FileEntry::new("bower.json", "", Stage::Dependencies));
        registry.register(FileEntry::new(".gitignore", "", Stage::Project));
        registry.register(FileEntry::new("app/index.html", "", Stage::App));
        registry.register(FileEntry::new("app/scripts/app.js", "", Stage::App));

        let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "app/index.html",
                "app/scripts/app.js",
                ".gitignore",
                "bower.json",
                "test/app_test.js"
            ]
        );
    }

    #[test]
    fn test_from_generated_uses_forward_slashes() {
        let entry = FileEntry::from_generated(&Marker, Stage::App);

        assert_eq!(entry.path, "app/scripts/marker.js");
        assert_eq!(entry.overwrite, Overwrite::IfMissing);
        assert_eq!(entry.content, "// marker\n");
    }

    #[test]
    fn test_registry_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::new("app/index.html", "<html>", Stage::App));
        registry.register_file(&Marker, Stage::App);

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.written.len(), 2);
        assert!(stats.skipped.is_empty());
        assert!(temp.path().join("app/index.html").exists());
        assert!(temp.path().join("app/scripts/marker.js").exists());
    }

    #[test]
    fn test_create_once_skipped_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app/scripts/marker.js");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "user code").unwrap();

        let mut registry = FileRegistry::new();
        registry.register_file(&Marker, Stage::App);

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.skipped, vec!["app/scripts/marker.js"]);
        assert_eq!(stats.total(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "user code");
    }

    #[test]
    fn test_failed_stage_aborts_later_stages() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app"), "not a directory").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("app/index.html", "", Stage::App));
        registry.register(FileEntry::new("bower.json", "{}", Stage::Dependencies));

        let err = registry.write_all(temp.path()).unwrap_err();

        assert!(err.to_string().contains("stage 'app' failed"));
        assert!(!temp.path().join("bower.json").exists());
    }

    #[test]
    fn test_lookup() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::new("a.txt", "content a", Stage::App));
        registry.register(FileEntry::new("b.txt", "content b", Stage::Tests));

        assert!(registry.contains("a.txt"));
        assert!(!registry.contains("c.txt"));
        assert_eq!(registry.get("b.txt").unwrap().content, "content b");
        assert_eq!(registry.entries_in(Stage::Tests).count(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.preview()[1].stage, Stage::Tests);
    }
}
