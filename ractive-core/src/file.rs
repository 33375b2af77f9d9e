use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that render a single file of a scaffolded project
pub trait GeneratedFile {
    /// Get the file path relative to the project root
    fn relative_path(&self) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Get the absolute file path under `base`
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be written at an absolute path
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists() {
            tracing::debug!(path = %self.path.display(), "skipped existing file");
            return Ok(WriteResult::Skipped);
        }

        write_file(&self.path, &self.content)?;
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files the user is expected to edit afterwards.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (scaffolded project files)
    #[default]
    Always,
    /// Only create if file doesn't exist (component files)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Readme;

    impl GeneratedFile for Readme {
        fn relative_path(&self) -> PathBuf {
            PathBuf::from("docs").join("README.md")
        }

        fn render(&self) -> String {
            "# readme\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.txt");

        let result = File::new(&path, "new content")
            .with_rules(FileRules::create_once())
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write")
            .with_rules(FileRules::create_once())
            .write()
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Readme.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(Readme.path(temp.path()), temp.path().join("docs/README.md"));
        assert_eq!(
            fs::read_to_string(temp.path().join("docs/README.md")).unwrap(),
            "# readme\n"
        );
    }

    #[test]
    fn test_write_into_file_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = File::new(blocker.join("child.txt"), "x").write().unwrap_err();

        assert!(err.to_string().contains("failed to create directory"));
    }
}
