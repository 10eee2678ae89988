//! Size-dependent strategy activation

use sortbench_algos::Sorter;
use std::sync::Arc;

/// Decides which strategies run at a given input size
///
/// Activation is a pure function of the size and the strategy's cost
/// class: below the threshold every strategy runs; at and above it only
/// classes that handle large inputs remain. The single threshold
/// comparison makes exclusion monotonic, so a strategy that drops out
/// stays out for every larger size.
#[derive(Debug, Clone, Copy)]
pub struct ActivationPolicy {
    large_input_threshold: usize,
}

impl ActivationPolicy {
    /// Policy with the given exclusion threshold
    pub fn new(large_input_threshold: usize) -> Self {
        Self {
            large_input_threshold,
        }
    }

    /// Whether `sorter` runs at `size`
    pub fn is_active(&self, sorter: &dyn Sorter, size: usize) -> bool {
        size < self.large_input_threshold || sorter.cost_class().handles_large_inputs()
    }

    /// The active subset of `registry` at `size`, in registry order
    pub fn active(&self, registry: &[Arc<dyn Sorter>], size: usize) -> Vec<Arc<dyn Sorter>> {
        registry
            .iter()
            .filter(|sorter| self.is_active(sorter.as_ref(), size))
            .cloned()
            .collect()
    }
}
