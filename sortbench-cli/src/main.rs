//! Sortbench binary entry point

use clap::Parser;
use sortbench_cli::commands::{self, Commands};

/// Benchmark classic sorting algorithms across a fixed ladder of input sizes
#[derive(Debug, Parser)]
#[command(name = "sortbench", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = commands::execute(cli.command) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
