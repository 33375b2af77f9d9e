//! Dependency installation report.

use super::output::{Output, Report};

/// What happened to the dependency install step.
#[derive(Debug)]
pub enum InstallReport {
    /// These package managers ran successfully.
    Ran(Vec<&'static str>),
    /// Installation was skipped; these would have run.
    Skipped(Vec<&'static str>),
}

impl Report for InstallReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        match self {
            InstallReport::Ran(tools) => {
                out.section("Installed dependencies");
                for tool in tools {
                    out.list_item(&format!("{} install", tool));
                }
            }
            InstallReport::Skipped(tools) => {
                let commands: Vec<_> = tools.iter().map(|t| format!("{} install", t)).collect();
                out.preformatted(&format!(
                    "Skipped installing dependencies. Run `{}` when you are ready.",
                    commands.join(" && ")
                ));
            }
        }
    }
}
