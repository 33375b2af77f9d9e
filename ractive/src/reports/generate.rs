//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generator name ("app" or "component").
    pub generator: &'static str,
    /// Generation result.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written.
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(path);
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Already present");
            for path in &written.skipped {
                out.kept_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated by the {} generator",
            preview.files.len(),
            self.generator
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written_lists_skipped() {
        let report = GenerateReport {
            generator: "component",
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("demo"),
                written: vec!["test/components/foo_test.js".to_string()],
                skipped: vec!["app/scripts/components/foo.js".to_string()],
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Generated: demo",
                "+ test/components/foo_test.js",
                "",
                "Already present:",
                "= app/scripts/components/foo.js",
            ]
        );
    }

    #[test]
    fn test_render_preview_summary() {
        let report = GenerateReport {
            generator: "app",
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: ".gitattributes".to_string(),
                    content: "* text=auto\n".to_string(),
                }],
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "-- .gitattributes --");
        assert_eq!(
            out.lines.last().unwrap(),
            "1 files would be generated by the app generator"
        );
    }
}
