//! In-place quicksort over an index-addressable buffer.

use std::cmp::Ordering;

/// Sorts `items` with a last-element-pivot quicksort and Lomuto partition.
///
/// An element moves left of the partition point when
/// `compare(element, pivot)` is not `Greater`. Ranges are kept on an explicit
/// stack and the smaller side is always handled first, so the stack stays
/// logarithmic in size even when the partitioning degrades to quadratic time
/// (already sorted or reverse sorted input). Not stable.
pub fn quicksort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pending = vec![(0, items.len())];

    while let Some((start, end)) = pending.pop() {
        if end - start < 2 {
            continue;
        }

        let pivot = start + partition(&mut items[start..end], &mut compare);
        let left = (start, pivot);
        let right = (pivot + 1, end);

        // Pushed last, popped first.
        if left.1 - left.0 > right.1 - right.0 {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}

/// Partitions around the last element and returns its final position.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let hi = items.len() - 1;
    let mut store = 0;

    for j in 0..hi {
        if compare(&items[j], &items[hi]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }

    items.swap(store, hi);
    store
}
