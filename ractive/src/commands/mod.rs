mod app;
mod completions;
mod component;

use app::AppCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use component::ComponentCommand;
use eyre::Result;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ractive_gen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ractive")]
#[command(version)]
#[command(about = "Scaffold Ractive web applications and components")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::App(cmd) => cmd.run(),
            Commands::Component(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new Ractive project
    App(AppCommand),

    /// Add a component to an existing project
    Component(ComponentCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
