use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ractive_gen_codegen::{ComponentGenerator, ComponentSpec};
use ractive_gen_config::PersistedSettings;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ComponentCommand {
    /// Component name, used for file names
    pub name: String,

    /// Project directory containing .yo-rc.json
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Isolate the component from its parent's data
    #[arg(long)]
    pub isolated: bool,

    /// Register the component globally with Ractive.components
    #[arg(long)]
    pub global: bool,

    /// Compile the template on the fly (Browserify only, emits just the .ract file)
    #[arg(long)]
    pub on_the_fly: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ComponentCommand {
    pub fn run(&self) -> Result<()> {
        let settings = PersistedSettings::load(&self.project).unwrap_or_exit();
        tracing::debug!(load_method = %settings.load_method, "loaded project settings");

        let spec = ComponentSpec::new(&self.name)
            .isolated(self.isolated)
            .global(self.global)
            .on_the_fly(self.on_the_fly);
        let generator = ComponentGenerator::new(settings.load_method, spec)?
            .with_test_framework(settings.test_framework);

        let report = ops::generate(
            &generator,
            GenerateOptions {
                output_dir: &self.project,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
