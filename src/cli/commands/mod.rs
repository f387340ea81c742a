//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod build;
pub mod clean;
pub mod completions;
pub mod environment;
pub mod notebookfiles;
pub mod r;
pub mod talk;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the file bundle for a talk from talks.yml
    Talk(talk::TalkArgs),

    /// Clone the companion notebook repositories
    Notebookfiles(notebookfiles::NotebookfilesArgs),

    /// Create the conda environment and build it
    Environment(environment::EnvironmentArgs),

    /// Install lab extensions, rebuild JupyterLab, install the kernel
    Build(build::BuildArgs),

    /// Install the R kernel and associated libs
    R(r::RArgs),

    /// Remove the environment, talk directories, and notebook folder
    Clean(clean::CleanArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Talk(args) => talk::run(ctx, args),
        Commands::Notebookfiles(args) => notebookfiles::run(ctx, args),
        Commands::Environment(args) => environment::run(ctx, args),
        Commands::Build(args) => build::run(ctx, args),
        Commands::R(args) => r::run(ctx, args),
        Commands::Clean(args) => clean::run(ctx, args),
        Commands::Completions(args) => {
            completions::run(args);
            Ok(())
        }
    }
}
