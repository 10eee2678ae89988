//! The strategy objects and registry consumed by the benchmark engine

use crate::algorithms;
use crate::error::SortError;
use std::fmt;
use std::sync::Arc;

/// Asymptotic cost class of a strategy, used for large-input decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostClass {
    /// O(n^2) comparison sorts
    Quadratic,
    /// O(n log n) comparison sorts, expected or guaranteed
    Linearithmic,
    /// O(n + k) non-comparison sorts
    Linear,
}

impl CostClass {
    /// Whether a strategy of this class stays tractable on large inputs
    pub fn handles_large_inputs(self) -> bool {
        !matches!(self, CostClass::Quadratic)
    }
}

impl fmt::Display for CostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostClass::Quadratic => write!(f, "quadratic"),
            CostClass::Linearithmic => write!(f, "linearithmic"),
            CostClass::Linear => write!(f, "linear"),
        }
    }
}

/// A named sorting strategy
///
/// Implementations are pure: the only observable effect of
/// [`Sorter::sort`] is that the slice holds the same elements in
/// non-decreasing order.
pub trait Sorter: Send + Sync {
    /// Unique strategy name, used as the result-series key
    fn name(&self) -> &'static str;

    /// Known asymptotic class of this strategy
    fn cost_class(&self) -> CostClass;

    /// Sorts `data` ascending in place
    fn sort(&self, data: &mut [u32]) -> Result<(), SortError>;
}

/// Selection sort strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn name(&self) -> &'static str {
        "selection_sort"
    }

    fn cost_class(&self) -> CostClass {
        CostClass::Quadratic
    }

    fn sort(&self, data: &mut [u32]) -> Result<(), SortError> {
        algorithms::selection_sort(data);
        Ok(())
    }
}

/// Shell sort strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl Sorter for ShellSort {
    fn name(&self) -> &'static str {
        "shell_sort"
    }

    fn cost_class(&self) -> CostClass {
        CostClass::Quadratic
    }

    fn sort(&self, data: &mut [u32]) -> Result<(), SortError> {
        algorithms::shell_sort(data);
        Ok(())
    }
}

/// Iterative quicksort strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn cost_class(&self) -> CostClass {
        CostClass::Linearithmic
    }

    fn sort(&self, data: &mut [u32]) -> Result<(), SortError> {
        algorithms::quick_sort(data);
        Ok(())
    }
}

/// Merge sort strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn cost_class(&self) -> CostClass {
        CostClass::Linearithmic
    }

    fn sort(&self, data: &mut [u32]) -> Result<(), SortError> {
        algorithms::merge_sort(data);
        Ok(())
    }
}

/// Counting sort strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl Sorter for CountingSort {
    fn name(&self) -> &'static str {
        "counting_sort"
    }

    fn cost_class(&self) -> CostClass {
        CostClass::Linear
    }

    fn sort(&self, data: &mut [u32]) -> Result<(), SortError> {
        algorithms::counting_sort(data)
    }
}

/// The fixed benchmark registry, in presentation order
pub fn registry() -> Vec<Arc<dyn Sorter>> {
    vec![
        Arc::new(SelectionSort),
        Arc::new(ShellSort),
        Arc::new(QuickSort),
        Arc::new(MergeSort),
        Arc::new(CountingSort),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_holds_five_uniquely_named_strategies() {
        let strategies = registry();
        assert_eq!(strategies.len(), 5);

        let names: HashSet<&str> = strategies.iter().map(|sorter| sorter.name()).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn registry_order_is_stable() {
        let names: Vec<&str> = registry().iter().map(|sorter| sorter.name()).collect();
        assert_eq!(
            names,
            vec![
                "selection_sort",
                "shell_sort",
                "quick_sort",
                "merge_sort",
                "counting_sort"
            ]
        );
    }

    #[test]
    fn cost_classes_match_expectations() {
        assert_eq!(SelectionSort.cost_class(), CostClass::Quadratic);
        assert_eq!(ShellSort.cost_class(), CostClass::Quadratic);
        assert_eq!(QuickSort.cost_class(), CostClass::Linearithmic);
        assert_eq!(MergeSort.cost_class(), CostClass::Linearithmic);
        assert_eq!(CountingSort.cost_class(), CostClass::Linear);
    }

    #[test]
    fn only_quadratic_strategies_refuse_large_inputs() {
        for sorter in registry() {
            let expected = sorter.cost_class() != CostClass::Quadratic;
            assert_eq!(sorter.cost_class().handles_large_inputs(), expected);
        }
    }

    #[test]
    fn strategies_sort_through_trait_objects() {
        for sorter in registry() {
            let mut data = vec![31u32, 4, 15, 9, 26, 5, 3];
            sorter.sort(&mut data).unwrap();
            assert_eq!(data, vec![3, 4, 5, 9, 15, 26, 31]);
        }
    }

    #[test]
    fn cost_class_display_is_lowercase() {
        assert_eq!(CostClass::Quadratic.to_string(), "quadratic");
        assert_eq!(CostClass::Linearithmic.to_string(), "linearithmic");
        assert_eq!(CostClass::Linear.to_string(), "linear");
    }
}
