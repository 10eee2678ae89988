//! Property tests for the sorting strategies
//!
//! `Vec::sort` is the oracle: comparing against the standard sort checks
//! both ordering and permutation in one assertion.

use proptest::collection::vec;
use proptest::prelude::*;
use sortbench_algos::{
    counting_sort, merge_sort, quick_sort, registry, selection_sort, shell_sort,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn selection_matches_std_sort(mut data in vec(any::<u32>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort();
        selection_sort(&mut data);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn shell_matches_std_sort(mut data in vec(any::<u32>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort();
        shell_sort(&mut data);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn quick_matches_std_sort(mut data in vec(any::<u32>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort();
        quick_sort(&mut data);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn merge_matches_std_sort(mut data in vec(any::<u32>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort();
        merge_sort(&mut data);
        prop_assert_eq!(data, expected);
    }

    // Counting sort gets values from its working domain; an unconstrained
    // u32 span would demand a table too large to allocate.
    #[test]
    fn counting_matches_std_sort(mut data in vec(1u32..=100_000, 1..200)) {
        let mut expected = data.clone();
        expected.sort();
        counting_sort(&mut data).unwrap();
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn registry_strategies_agree(data in vec(1u32..=100_000, 1..200)) {
        let mut expected = data.clone();
        expected.sort();
        for sorter in registry() {
            let mut work = data.clone();
            sorter.sort(&mut work).unwrap();
            prop_assert_eq!(&work, &expected, "strategy {}", sorter.name());
        }
    }

    #[test]
    fn strategies_are_deterministic(data in vec(1u32..=100_000, 1..100)) {
        for sorter in registry() {
            let mut first = data.clone();
            let mut second = data.clone();
            sorter.sort(&mut first).unwrap();
            sorter.sort(&mut second).unwrap();
            prop_assert_eq!(&first, &second, "strategy {}", sorter.name());
        }
    }
}
