//! Binary search over an ascending slice.
//!
//! Variables:
//!   low, high = inclusive bounds of the live interval
//!   mid       = low + (high - low) / 2
//!
//! Every comparison halves the interval, so a slice of length n is settled in
//! at most floor(log2 n) + 1 comparisons.

use std::cmp::Ordering;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("sequence is not ascending: element {index} is greater than its successor")]
    Unsorted { index: usize },
}

/// Index of some element equal to `target`, or `None`.
///
/// With duplicates, whichever equal element is compared first wins.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = arr.len().checked_sub(1)?;
    while low <= high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // interval is empty once high would drop below zero
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }
    None
}

/// Whether `target` occurs in the ascending slice `arr`.
pub fn search<T: Ord>(arr: &[T], target: &T) -> bool {
    binary_search(arr, target).is_some()
}

/// Like [`search`], but rejects a slice that is not ascending.
pub fn search_checked<T: Ord>(arr: &[T], target: &T) -> Result<bool, SearchError> {
    if let Some(index) = first_descent(arr) {
        tracing::debug!(index, "refusing to search unsorted sequence");
        return Err(SearchError::Unsorted { index });
    }
    Ok(search(arr, target))
}

/// First index whose element is `>= target`; `arr.len()` if none is.
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        if &arr[m] < target {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

/// True when every element is `<=` its successor.
pub fn is_sorted_ascending<T: Ord>(arr: &[T]) -> bool {
    first_descent(arr).is_none()
}

fn first_descent<T: Ord>(arr: &[T]) -> Option<usize> {
    arr.windows(2).position(|w| w[0] > w[1])
}
