//! The five benchmark sorting algorithms as plain functions
//!
//! The comparison sorts are generic over the element type; counting sort
//! works on `u32` values only. Every function sorts ascending and in place.

use crate::error::SortError;

/// Selection sort: repeatedly swaps the minimum of the unsorted suffix
/// into place.
///
/// O(n^2) comparisons regardless of input order.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut min_index = i;
        for j in i + 1..data.len() {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        data.swap(i, min_index);
    }
}

/// Shell sort with the halving gap sequence n/2, n/4, ..., 1.
///
/// Each pass insertion-sorts the subsequence of elements one gap apart;
/// the final gap-1 pass is a plain insertion sort over nearly sorted data.
pub fn shell_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && data[j - gap] > data[j] {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Iterative quicksort using the Lomuto partition scheme.
///
/// Pending ranges live on an explicit stack instead of the call stack, so
/// unbalanced partitions cannot overflow recursion.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mut ranges = vec![(0, data.len() - 1)];
    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(data, low, high);
        if pivot > low {
            ranges.push((low, pivot - 1));
        }
        if pivot < high {
            ranges.push((pivot + 1, high));
        }
    }
}

/// Partitions `data[low..=high]` around its last element and returns the
/// pivot's final index.
fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    let mut store = low;
    for probe in low..high {
        if data[probe] <= data[high] {
            data.swap(store, probe);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

/// Top-down merge sort with a temporary buffer per split.
///
/// Splits at the midpoint, sorts both halves, then merges by repeated
/// minimum comparison. Ties take the left element, which keeps the sort
/// stable.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();
    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(data, &left, &right);
}

/// Merges two sorted runs into `out`, draining the longer remainder once
/// one side is exhausted.
fn merge<T: Ord + Clone>(out: &mut [T], left: &[T], right: &[T]) {
    let mut i = 0;
    let mut j = 0;
    let mut k = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out[k] = left[i].clone();
            i += 1;
        } else {
            out[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    if i < left.len() {
        out[k..].clone_from_slice(&left[i..]);
    } else {
        out[k..].clone_from_slice(&right[j..]);
    }
}

/// Counting sort for `u32` values.
///
/// Builds a frequency table over the observed min..=max span, converts it
/// to cumulative counts, then places every element directly into its final
/// slot. Runs in O(n + k) time where k is the span width.
///
/// # Errors
///
/// [`SortError::EmptyInput`] when `data` is empty, since min and max are
/// undefined there; [`SortError::TableOverflow`] when the frequency table
/// for the value span cannot be allocated.
pub fn counting_sort(data: &mut [u32]) -> Result<(), SortError> {
    let min = *data.iter().min().ok_or(SortError::EmptyInput)?;
    let max = *data.iter().max().ok_or(SortError::EmptyInput)?;

    let slots = u64::from(max - min) + 1;
    let width = usize::try_from(slots).map_err(|_| SortError::TableOverflow { slots })?;
    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(width)
        .map_err(|_| SortError::TableOverflow { slots })?;
    counts.resize(width, 0);

    for &value in data.iter() {
        counts[(value - min) as usize] += 1;
    }
    for slot in 1..width {
        counts[slot] += counts[slot - 1];
    }

    let mut placed = vec![0u32; data.len()];
    for &value in data.iter() {
        let bucket = &mut counts[(value - min) as usize];
        *bucket -= 1;
        placed[*bucket] = value;
    }
    data.copy_from_slice(&placed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted(data: &[u32]) {
        assert!(data.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn selection_sorts_reversed_input() {
        let mut data: Vec<u32> = (0..50).rev().collect();
        selection_sort(&mut data);
        assert_eq!(data, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shell_sorts_mixed_input() {
        let mut data = vec![23u32, 1, 99, 4, 4, 17, 0, 62];
        shell_sort(&mut data);
        assert_eq!(data, vec![0, 1, 4, 4, 17, 23, 62, 99]);
    }

    #[test]
    fn quick_sorts_already_sorted_input() {
        // Worst case for a last-element pivot; the explicit stack keeps it
        // from exhausting the call stack.
        let mut data: Vec<u32> = (0..2000).collect();
        quick_sort(&mut data);
        assert_eq!(data, (0..2000).collect::<Vec<u32>>());
    }

    #[test]
    fn quick_sorts_all_equal_input() {
        let mut data = vec![7u32; 128];
        quick_sort(&mut data);
        assert_eq!(data, vec![7u32; 128]);
    }

    #[test]
    fn merge_sorts_odd_length_input() {
        let mut data = vec![9u32, 3, 7, 1, 8, 2, 5];
        merge_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn merge_is_stable() {
        // Orders by key only; equal keys must keep their original order.
        #[derive(Clone, Debug)]
        struct Tagged(u32, usize);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let mut data = vec![Tagged(2, 0), Tagged(1, 1), Tagged(2, 2), Tagged(1, 3)];
        merge_sort(&mut data);
        let pairs: Vec<(u32, usize)> = data.iter().map(|tagged| (tagged.0, tagged.1)).collect();
        assert_eq!(pairs, vec![(1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    #[test]
    fn counting_sorts_small_sample() {
        let mut data = vec![5u32, 3, 5, 1];
        counting_sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 3, 5, 5]);
    }

    #[test]
    fn counting_handles_the_full_value_range() {
        let mut data = vec![100_000u32, 1, 50_000, 1];
        counting_sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 50_000, 100_000]);
    }

    #[test]
    fn counting_handles_single_value_span() {
        let mut data = vec![42u32; 16];
        counting_sort(&mut data).unwrap();
        assert_eq!(data, vec![42u32; 16]);
    }

    #[test]
    fn counting_rejects_empty_input() {
        let mut data: Vec<u32> = Vec::new();
        assert_eq!(counting_sort(&mut data), Err(SortError::EmptyInput));
    }

    #[test]
    fn comparison_sorts_accept_empty_and_single() {
        let mut empty: Vec<u32> = Vec::new();
        selection_sort(&mut empty);
        shell_sort(&mut empty);
        quick_sort(&mut empty);
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7u32];
        selection_sort(&mut single);
        shell_sort(&mut single);
        quick_sort(&mut single);
        merge_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn all_sorts_agree_on_duplicate_heavy_input() {
        let base: Vec<u32> = (0..300).map(|i| (i * 31) % 10 + 1).collect();
        let mut expected = base.clone();
        expected.sort_unstable();

        let mut a = base.clone();
        selection_sort(&mut a);
        assert_eq!(a, expected);

        let mut b = base.clone();
        shell_sort(&mut b);
        assert_eq!(b, expected);

        let mut c = base.clone();
        quick_sort(&mut c);
        assert_eq!(c, expected);

        let mut d = base.clone();
        merge_sort(&mut d);
        assert_eq!(d, expected);

        let mut e = base;
        counting_sort(&mut e).unwrap();
        assert_eq!(e, expected);
        assert_sorted(&e);
    }
}
