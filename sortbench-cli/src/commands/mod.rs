//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod run;

pub use run::{OutputFormat, RunArgs};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full benchmark over the fixed size ladder
    Run(RunArgs),

    /// List available components
    List {
        /// What to list
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the registered sorting strategies
    Strategies,

    /// List the supported output formats
    Formats,
}

/// Dispatches a parsed command
pub fn execute(command: Commands) -> CliResult<()> {
    match command {
        Commands::Run(args) => args.execute(),
        Commands::List { subcommand } => list(subcommand),
    }
}

fn list(subcommand: ListCommands) -> CliResult<()> {
    match subcommand {
        ListCommands::Strategies => {
            for sorter in sortbench_engine::registry() {
                println!("{:<16} {}", sorter.name(), sorter.cost_class());
            }
        }
        ListCommands::Formats => {
            for format in OutputFormat::all() {
                println!("{format}");
            }
        }
    }
    Ok(())
}
