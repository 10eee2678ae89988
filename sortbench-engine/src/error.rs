//! Error types for the benchmark engine

use thiserror::Error;

/// Engine-level errors
///
/// Strategy failures inside a worker never surface here; they are recorded
/// as failed cells in the result store. These variants cover configuration
/// problems and harness faults.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A precondition on configuration or a component argument was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A benchmark run is already in flight
    #[error("a benchmark run is already in progress")]
    RunInProgress,

    /// The worker pool for a batch could not be built
    #[error("worker pool construction failed: {0}")]
    ThreadPool(String),

    /// A worker exited without reporting a result
    #[error("worker for size {size} vanished before reporting a result")]
    WorkerLost {
        /// Input size of the batch that lost a worker
        size: usize,
    },

    /// The background run thread panicked outside any worker
    #[error("benchmark run aborted: {0}")]
    RunPanicked(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
