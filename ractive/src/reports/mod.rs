//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod install;
mod output;
mod welcome;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use install::InstallReport;
pub use output::{Report, TerminalOutput};
pub use welcome::WelcomeReport;
