//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// CLI-specific errors with user-facing messages
#[derive(Debug)]
pub enum CliError {
    /// The requested output file could not be created
    OutputUnwritable(PathBuf),
    /// The engine refused to start a benchmark run
    TriggerRejected(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::OutputUnwritable(path) => {
                write!(f, "Cannot write output file: {}", path.display())
            }
            CliError::TriggerRejected(reason) => {
                write!(f, "Benchmark not started: {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_unwritable_names_the_path() {
        let error = CliError::OutputUnwritable(PathBuf::from("/tmp/results.txt"));
        assert_eq!(
            error.to_string(),
            "Cannot write output file: /tmp/results.txt"
        );
    }

    #[test]
    fn trigger_rejected_carries_the_reason() {
        let error = CliError::TriggerRejected("already running".to_string());
        assert_eq!(error.to_string(), "Benchmark not started: already running");
    }
}
