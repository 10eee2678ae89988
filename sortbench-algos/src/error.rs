//! Error types for the sorting strategies

use thiserror::Error;

/// Errors a sorting strategy can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Counting sort cannot derive its value span from an empty sequence
    #[error("counting sort requires at least one element")]
    EmptyInput,

    /// The counting table for the observed value span cannot be allocated
    #[error("counting table of {slots} slots exceeds available memory")]
    TableOverflow {
        /// Number of slots the observed value span would require
        slots: u64,
    },
}
