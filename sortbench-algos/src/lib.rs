//! Classic in-memory sorting algorithms behind a common strategy interface
//!
//! The five benchmark strategies (selection, shell, quick, merge, counting)
//! are available both as plain functions in [`algorithms`] and as objects
//! behind the [`Sorter`] trait, which is what the benchmark engine consumes.

#![warn(missing_docs)]

pub mod algorithms;
pub mod error;
pub mod sorter;

pub use algorithms::{counting_sort, merge_sort, quick_sort, selection_sort, shell_sort};
pub use error::SortError;
pub use sorter::{
    registry, CostClass, CountingSort, MergeSort, QuickSort, SelectionSort, ShellSort, Sorter,
};
