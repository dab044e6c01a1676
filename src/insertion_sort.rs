//! Insertion Sort Implementation
//!
//! Builds the sorted result one element at a time: each element is lifted out
//! as the key, every larger element of the sorted prefix is shifted one slot
//! right, and the key drops into the gap.
//!
//! Complexity: O(n²) comparisons and moves in the worst case, O(n) on sorted input.
//! Stable: elements are only shifted past a strictly greater key.

use crate::step::{Silent, Step, StepObserver};

/// Sort a slice in-place using insertion sort.
///
/// # Arguments
/// * `data` - The slice to sort in-place
pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    sort_observed(data, &mut Silent);
}

/// Sort a slice in-place using insertion sort, reporting every step to `observer`.
///
/// For each index `i` from 1 the observer sees one [`Step::Insert`], one
/// [`Step::Shift`] per element moved right, and one [`Step::Place`]. While
/// elements are being shifted the key's eventual slot still holds a stale copy,
/// so `Shift` snapshots show a duplicated value until the key is placed.
pub fn sort_observed<T, O>(data: &mut [T], observer: &mut O)
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    // Invariant: data[..i] is sorted at the top of each iteration.
    for i in 1..data.len() {
        let key = data[i].clone();
        observer.on_step(&Step::Insert { index: i, key: &key });

        let mut hole = i;
        while hole > 0 && data[hole - 1] > key {
            data[hole] = data[hole - 1].clone();
            hole -= 1;
            observer.on_step(&Step::Shift {
                from: hole,
                value: &data[hole + 1],
                key: &key,
                data: &*data,
            });
        }

        data[hole] = key;
        observer.on_step(&Step::Place {
            position: hole,
            key: &data[hole],
            data: &*data,
        });
    }
}
