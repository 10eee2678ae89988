//! Sortbench CLI library
//!
//! Command-line front end for the sorting benchmark: argument parsing,
//! progress display, and result-table rendering.

pub mod commands;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
