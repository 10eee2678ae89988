//! Uniform random dataset generation

use crate::error::{EngineError, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::ops::RangeInclusive;

/// A generated dataset; element count equals the requested size
pub type Dataset = Vec<u32>;

/// Produces uniform random datasets over a fixed value range
///
/// One generator instance serves a whole run; successive calls advance the
/// RNG state, so equal-size requests yield independent datasets.
#[derive(Debug)]
pub struct DataGenerator {
    range: RangeInclusive<u32>,
    rng: Xoshiro256PlusPlus,
}

impl DataGenerator {
    /// Creates a generator over `range`, seeded from `seed` or entropy
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidArgument`] when `range` contains no values.
    pub fn new(range: RangeInclusive<u32>, seed: Option<u64>) -> Result<Self> {
        if range.is_empty() {
            return Err(EngineError::InvalidArgument(format!(
                "value range {}..={} contains no values",
                range.start(),
                range.end()
            )));
        }
        let rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        Ok(Self { range, rng })
    }

    /// Generates `len` independent uniform values from the configured range
    pub fn generate(&mut self, len: usize) -> Dataset {
        (0..len).map(|_| self.rng.gen_range(self.range.clone())).collect()
    }
}
