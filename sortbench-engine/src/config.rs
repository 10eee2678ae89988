//! Benchmark configuration and the fixed preset constants

use crate::error::{EngineError, Result};
use std::ops::RangeInclusive;

/// The fixed ladder of input sizes, ascending
pub const SIZE_STEPS: [usize; 7] = [1024, 4096, 16384, 65536, 262144, 1048576, 4194304];

/// At and above this size only strategies that handle large inputs stay active
pub const LARGE_INPUT_THRESHOLD: usize = 65536;

/// Inclusive range generated dataset elements are drawn from
pub const VALUE_RANGE: RangeInclusive<u32> = 1..=100_000;

/// Benchmark run configuration
///
/// [`Default`] carries the fixed preset; tests build scaled-down instances
/// through struct update syntax.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Input sizes to benchmark, strictly increasing and positive
    pub sizes: Vec<usize>,
    /// Size at which quadratic strategies drop out
    pub large_input_threshold: usize,
    /// Inclusive range datasets are drawn from
    pub value_range: RangeInclusive<u32>,
    /// Fixed RNG seed for reproducible datasets; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Cap on worker threads per batch; `None` means the CPU count
    pub max_threads: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: SIZE_STEPS.to_vec(),
            large_input_threshold: LARGE_INPUT_THRESHOLD,
            value_range: VALUE_RANGE,
            seed: None,
            max_threads: None,
        }
    }
}

impl BenchConfig {
    /// Checks the structural invariants the runner relies on
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(EngineError::InvalidArgument("size list is empty".into()));
        }
        if self.sizes.first() == Some(&0) {
            return Err(EngineError::InvalidArgument(
                "size list entries must be positive".into(),
            ));
        }
        if !self.sizes.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(EngineError::InvalidArgument(
                "size list must be strictly increasing".into(),
            ));
        }
        if self.value_range.is_empty() {
            return Err(EngineError::InvalidArgument(
                "value range contains no values".into(),
            ));
        }
        if self.max_threads == Some(0) {
            return Err(EngineError::InvalidArgument(
                "worker thread cap must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
