//! Benchmark orchestration for the sortbench sorting strategies
//!
//! This crate owns everything between the pure sorting algorithms and a
//! front end: dataset generation, the size-dependent activation policy,
//! parallel per-size dispatch with as-completed collection, the shared
//! result store, and the event channel a presentation layer drains.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod policy;
pub mod runner;
pub mod sink;
pub mod store;

pub use config::{BenchConfig, LARGE_INPUT_THRESHOLD, SIZE_STEPS, VALUE_RANGE};
pub use controller::{BenchController, RunHandle};
pub use error::{EngineError, Result};
pub use generator::{DataGenerator, Dataset};
pub use policy::ActivationPolicy;
pub use runner::{BenchRunner, RunSummary};
pub use sink::{EventSink, NullSink, PresentationSink, UiEvent};
pub use store::{ResultStore, Sample, SeriesSnapshot, StoreSnapshot};

// Re-exported so front ends need only this crate for the common path.
pub use sortbench_algos::{registry, CostClass, SortError, Sorter};
