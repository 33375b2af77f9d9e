//! Install operation - fetch npm and bower dependencies.

use std::{path::Path, process::Command};

use eyre::{Result, WrapErr, bail};

use crate::reports::InstallReport;

/// Package managers run after scaffolding, in order.
const INSTALLERS: [&str; 2] = ["npm", "bower"];

/// Run `npm install` and `bower install` in `dir`.
///
/// A missing tool or a failing install aborts the run.
pub fn install(dir: &Path) -> Result<InstallReport> {
    let mut ran = Vec::new();

    for tool in INSTALLERS {
        tracing::info!(tool, dir = %dir.display(), "installing dependencies");
        let status = Command::new(tool)
            .arg("install")
            .current_dir(dir)
            .status()
            .wrap_err_with(|| format!("Failed to run {} install", tool))?;

        if !status.success() {
            bail!("{} install exited with {}", tool, status);
        }
        ran.push(tool);
    }

    Ok(InstallReport::Ran(ran))
}

/// Report for a run with `--skip-install`.
pub fn skipped_report() -> InstallReport {
    InstallReport::Skipped(INSTALLERS.to_vec())
}
