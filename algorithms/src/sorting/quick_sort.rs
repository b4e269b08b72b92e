/// Sort `arr` ascending in place.
///
/// The first element of each range is the pivot. Only the smaller side is
/// recursed into; the larger side is handled by the loop, which keeps the
/// stack O(log n) even for already sorted input.
pub fn quick_sort<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let p = partition(arr);
        let (left, rest) = std::mem::take(&mut arr).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

/// Partition around `arr[0]`. Returns the pivot's final index.
///
/// The pivot stands where the hole of a hole-filling partition would be:
/// at `i` while `j` scans left, at `j` while `i` scans right. Each swap
/// moves it across, so elements land exactly where hole filling puts them.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let (mut i, mut j) = (0, arr.len() - 1);
    while i < j {
        while i < j && arr[j] >= arr[i] {
            j -= 1;
        }
        arr.swap(i, j);
        while i < j && arr[i] <= arr[j] {
            i += 1;
        }
        arr.swap(i, j);
    }
    i
}
