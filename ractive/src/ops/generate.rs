//! Generate operation - run a generator into a directory or preview it.

use std::path::Path;

use eyre::{Context, Result};
use ractive_gen_codegen::Generator;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory files are written into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate<G: Generator>(generator: &G, opts: GenerateOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let stats = generator
            .generate(opts.output_dir)
            .wrap_err_with(|| format!("Failed to run the {} generator", generator.name()))?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written,
            skipped: stats.skipped,
        })
    };

    Ok(GenerateReport {
        generator: generator.name(),
        result,
    })
}
