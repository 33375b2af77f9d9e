use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use ractive_gen_codegen::{ProjectGenerator, ProjectOptions};
use ractive_gen_config::{Answers, TestFramework};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    prompts,
    reports::{Report, TerminalOutput, WelcomeReport},
};

#[derive(Args)]
pub struct AppCommand {
    /// Project name (defaults to the current directory name)
    pub name: Option<String>,

    /// Output directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Read answers from a TOML file instead of prompting
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Do not run npm install and bower install afterwards
    #[arg(long)]
    pub skip_install: bool,

    /// Do not print the welcome message
    #[arg(long)]
    pub skip_welcome_message: bool,

    /// Do not record settings in .yo-rc.json
    #[arg(long)]
    pub skip_yo_rc: bool,

    /// Test framework for the scaffolded tests: mocha or jasmine
    #[arg(long, default_value = "mocha")]
    pub test_framework: TestFramework,

    /// Do not include Google Analytics tracking code
    #[arg(long)]
    pub skip_analytics: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl AppCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();

        if self.shows_welcome() {
            WelcomeReport.render(&mut out);
        }

        let answers = self.answers()?;
        let options = ProjectOptions {
            test_framework: self.test_framework,
            skip_yo_rc: self.skip_yo_rc,
            skip_analytics: self.skip_analytics,
        };
        let generator = ProjectGenerator::new(&answers, options)?;

        let report = ops::generate(
            &generator,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut out);

        if self.dry_run {
            return Ok(());
        }

        if self.skip_install {
            ops::install::skipped_report().render(&mut out);
        } else {
            ops::install::install(&self.output)?.render(&mut out);
        }

        Ok(())
    }

    fn shows_welcome(&self) -> bool {
        !self.skip_welcome_message
    }

    fn answers(&self) -> Result<Answers> {
        match &self.answers {
            Some(path) => {
                let mut answers = Answers::from_file(path).unwrap_or_exit();
                if let Some(name) = &self.name {
                    answers.project = name.clone();
                }
                Ok(answers)
            }
            None => prompts::ask_answers(&self.default_name()?),
        }
    }

    fn default_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let dir = if self.output == PathBuf::from(".") {
            std::env::current_dir().wrap_err("Failed to get current directory")?
        } else {
            self.output.clone()
        };
        Ok(dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string())
    }
}
