//! The run command: trigger a benchmark and render the results

use crate::error::{CliError, CliResult};
use crate::output::{JsonFormatter, MarkdownFormatter, ResultFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Context;
use clap::{Args, ValueEnum};
use sortbench_engine::{BenchConfig, BenchController, UiEvent};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format for the final result table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// JSON document, one entry per strategy
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Every supported format, in display order
    pub fn all() -> [OutputFormat; 3] {
        [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Markdown,
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Output format for the final result table
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the final table to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress the progress display and non-error log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Runs the full benchmark and renders the final table
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        // Open the output target first so a bad path fails before minutes
        // of benchmarking.
        let mut formatter = self.build_formatter()?;

        let controller =
            BenchController::new(BenchConfig::default(), sortbench_engine::registry())?;
        let sizes = controller.config().sizes.clone();

        let mut progress = ProgressReporter::new(self.quiet, &sizes);
        progress.begin(controller.planned_samples() as u64);

        let handle = controller
            .trigger()
            .map_err(|error| CliError::TriggerRejected(error.to_string()))?;
        while let Some(event) = handle.next_event() {
            if let UiEvent::Series(snapshot) = event {
                progress.observe(&snapshot);
            }
        }
        let summary = handle.join()?;
        progress.finish();

        formatter.render(&controller.snapshot(), &sizes)?;
        if let Some(path) = &self.output {
            println!("results written to {}", path.display());
        }
        log::info!(
            "{} samples recorded ({} failures) in {:.3}s",
            summary.samples_recorded,
            summary.failures,
            summary.total_elapsed.as_secs_f64()
        );
        Ok(())
    }

    fn build_formatter(&self) -> CliResult<Box<dyn ResultFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file =
                    File::create(path).with_context(|| CliError::OutputUnwritable(path.clone()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    fn init_logging(&self) {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
}
