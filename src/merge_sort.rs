//! Merge Sort Implementation
//!
//! Top-down merge sort over an inclusive index range. Each range is halved at
//! `m = l + (r - l) / 2`, both halves are sorted recursively, and the two
//! sorted halves are merged through one scratch buffer.
//!
//! The scratch buffer is reserved once, sized to the whole range, before the
//! first step is reported. A sort therefore either fails up front with
//! [`SortError::AllocationFailure`] or runs to completion.
//!
//! Complexity: O(n log n) comparisons, O(n) extra space.
//! Stable: ties are taken from the left half first.

use crate::error::SortError;
use crate::step::{Silent, Step, StepObserver};

/// Sort a slice in-place using merge sort.
pub fn sort<T: Ord + Clone>(data: &mut [T]) -> Result<(), SortError> {
    sort_observed(data, &mut Silent)
}

/// Sort a whole slice in-place, reporting every step to `observer`.
pub fn sort_observed<T, O>(data: &mut [T], observer: &mut O) -> Result<(), SortError>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    if data.is_empty() {
        return Ok(());
    }
    let last = data.len() - 1;
    sort_range(data, 0, last, observer)
}

/// Sort the inclusive range `data[l..=r]` in-place.
///
/// A range of zero or one element (`l >= r`) is already sorted and produces
/// no steps. Otherwise the observer sees a [`Step::Divide`] for the range
/// before either half is sorted, then the steps of both halves, then the
/// steps of the final merge.
///
/// # Errors
/// [`SortError::AllocationFailure`] if the scratch buffer cannot be reserved.
/// No step is reported and `data` is untouched in that case.
///
/// # Panics
/// If `l < r` and `r` is not a valid index into `data`.
pub fn sort_range<T, O>(
    data: &mut [T],
    l: usize,
    r: usize,
    observer: &mut O,
) -> Result<(), SortError>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    if l >= r {
        return Ok(());
    }
    sort_range_reserving(data, l, r, r - l + 1, observer)
}

/// Reserve a scratch buffer of `capacity` elements, then sort `data[l..=r]` with it.
fn sort_range_reserving<T, O>(
    data: &mut [T],
    l: usize,
    r: usize,
    capacity: usize,
    observer: &mut O,
) -> Result<(), SortError>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    assert!(
        r < data.len(),
        "merge sort range out of bounds: {}..={} for length {}",
        l,
        r,
        data.len()
    );
    let mut scratch = reserve_scratch(capacity)?;
    sort_range_with(data, l, r, &mut scratch, observer);
    Ok(())
}

fn sort_range_with<T, O>(data: &mut [T], l: usize, r: usize, scratch: &mut Vec<T>, observer: &mut O)
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    if l >= r {
        return;
    }

    let m = l + (r - l) / 2;
    observer.on_step(&Step::Divide {
        range: l..=r,
        values: &data[l..=r],
    });

    sort_range_with(data, l, m, scratch, observer);
    sort_range_with(data, m + 1, r, scratch, observer);
    merge_with(data, l, m, r, scratch, observer);
}

/// Merge the sorted ranges `data[l..=m]` and `data[m + 1..=r]` into a sorted `data[l..=r]`.
///
/// Both halves are copied into a scratch buffer that lives only for this
/// call. Every element written back is reported as a [`Step::Write`] whose
/// snapshot is `data[..=r]`.
///
/// # Errors
/// [`SortError::AllocationFailure`] if the buffer cannot be reserved; `data`
/// is left untouched and no step is reported in that case.
///
/// # Panics
/// If `l <= m <= r < data.len()` does not hold.
pub fn merge<T, O>(
    data: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    observer: &mut O,
) -> Result<(), SortError>
where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    assert!(
        l <= m && m <= r && r < data.len(),
        "invalid merge bounds: l={}, m={}, r={} for length {}",
        l,
        m,
        r,
        data.len()
    );

    let mut scratch = reserve_scratch(r - l + 1)?;
    merge_with(data, l, m, r, &mut scratch, observer);
    Ok(())
}

/// Merge step over a pre-reserved `scratch`; never allocates when its
/// capacity covers `r - l + 1` elements.
fn merge_with<T, O>(
    data: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    scratch: &mut Vec<T>,
    observer: &mut O,
) where
    T: Ord + Clone,
    O: StepObserver<T> + ?Sized,
{
    scratch.clear();
    scratch.extend_from_slice(&data[l..=r]);
    let (left, right) = scratch.split_at(m - l + 1);
    observer.on_step(&Step::Merge {
        range: l..=r,
        left,
        right,
    });

    let (mut i, mut j, mut k) = (0, 0, l);
    while i < left.len() && j < right.len() {
        // `<=` keeps equal elements from the left half first.
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        report_write(data, k, r, observer);
        k += 1;
    }

    // At most one of these is non-empty.
    for value in left[i..].iter().chain(&right[j..]) {
        data[k] = value.clone();
        report_write(data, k, r, observer);
        k += 1;
    }
}

fn report_write<T, O>(data: &[T], position: usize, r: usize, observer: &mut O)
where
    O: StepObserver<T> + ?Sized,
{
    observer.on_step(&Step::Write {
        position,
        value: &data[position],
        data: &data[..=r],
    });
}

/// Empty buffer with room for `capacity` elements.
fn reserve_scratch<T>(capacity: usize) -> Result<Vec<T>, SortError> {
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(capacity)
        .map_err(|_| SortError::AllocationFailure { elements: capacity })?;
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::is_sorted;
    use proptest::{collection::vec, prelude::*};
    use rand::Rng;
    use std::cmp::Ordering;

    /// Value tagged with its original index; ordering ignores the tag.
    #[derive(Debug, Clone)]
    struct Tagged {
        value: u8,
        origin: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.value.cmp(&other.value)
        }
    }

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        sort(&mut data).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        let mut steps = 0;
        sort_observed(&mut data, &mut |_: &Step<'_, i32>| steps += 1).unwrap();
        assert_eq!(data, vec![42]);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        sort(&mut data).unwrap();
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..10_000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data).unwrap();
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_textbook_example() {
        let mut data = vec![38, 27, 43, 3, 9, 82, 10];
        let mut merges: Vec<(Vec<i32>, Vec<i32>)> = Vec::new();
        let mut first_merged: Option<Vec<i32>> = None;
        sort_observed(&mut data, &mut |step: &Step<'_, i32>| match step {
            Step::Merge { left, right, .. } => merges.push((left.to_vec(), right.to_vec())),
            Step::Write { position: 1, data, .. } if first_merged.is_none() => {
                first_merged = Some(data[..=1].to_vec());
            }
            _ => {}
        })
        .unwrap();

        assert_eq!(data, vec![3, 9, 10, 27, 38, 43, 82]);
        assert_eq!(merges[0], (vec![38], vec![27]));
        assert_eq!(first_merged, Some(vec![27, 38]));
        assert_eq!(merges.len(), 6);
    }

    #[test]
    fn test_divide_precedes_merge() {
        let mut data = vec![4, 3, 2, 1];
        let mut log: Vec<String> = Vec::new();
        sort_observed(&mut data, &mut |step: &Step<'_, i32>| match step {
            Step::Divide { range, .. } => log.push(format!("divide {:?}", range)),
            Step::Merge { range, .. } => log.push(format!("merge {:?}", range)),
            _ => {}
        })
        .unwrap();

        assert_eq!(
            log,
            vec![
                "divide 0..=3",
                "divide 0..=1",
                "merge 0..=1",
                "divide 2..=3",
                "merge 2..=3",
                "merge 0..=3",
            ]
        );
    }

    #[test]
    fn test_write_snapshots_cover_prefix() {
        let mut data = vec![2, 1, 9, 9];
        let mut snapshots: Vec<Vec<i32>> = Vec::new();
        sort_range(&mut data, 0, 1, &mut |step: &Step<'_, i32>| {
            if let Step::Write { data, .. } = step {
                snapshots.push(data.to_vec());
            }
        })
        .unwrap();

        assert_eq!(snapshots, vec![vec![1, 1], vec![1, 2]]);
        assert_eq!(data, vec![1, 2, 9, 9]);
    }

    #[test]
    fn test_failed_reservation_reports_no_steps() {
        let mut data = vec![38, 27, 43, 3, 9, 82, 10];
        let mut steps = 0;
        let mut count = |_: &Step<'_, i32>| steps += 1;
        let result = sort_range_reserving(&mut data, 0, 6, usize::MAX, &mut count);

        assert!(matches!(
            result,
            Err(SortError::AllocationFailure { elements: usize::MAX })
        ));
        assert_eq!(steps, 0);
        assert_eq!(data, vec![38, 27, 43, 3, 9, 82, 10]);
    }

    #[test]
    fn test_reserve_scratch() {
        let scratch = reserve_scratch::<i32>(16).unwrap();
        assert!(scratch.is_empty());
        assert!(scratch.capacity() >= 16);
        assert!(matches!(
            reserve_scratch::<i32>(usize::MAX),
            Err(SortError::AllocationFailure { elements: usize::MAX })
        ));
    }

    #[test]
    fn test_scratch_is_reused_without_growing() {
        let mut data: Vec<i32> = (0..64).rev().collect();
        let mut scratch = reserve_scratch(data.len()).unwrap();
        let capacity = scratch.capacity();
        sort_range_with(&mut data, 0, 63, &mut scratch, &mut Silent);

        assert_eq!(data, (0..64).collect::<Vec<i32>>());
        assert_eq!(scratch.capacity(), capacity);
    }

    #[test]
    fn test_sort_range_leaves_outside_untouched() {
        let mut data = vec![9, 5, 4, 3, 0];
        sort_range(&mut data, 1, 3, &mut Silent).unwrap();
        assert_eq!(data, vec![9, 3, 4, 5, 0]);
    }

    #[test]
    fn test_sort_range_base_case() {
        let mut data = vec![3, 2, 1];
        sort_range(&mut data, 2, 2, &mut Silent).unwrap();
        sort_range(&mut data, 2, 0, &mut Silent).unwrap();
        assert_eq!(data, vec![3, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "merge sort range out of bounds")]
    fn test_sort_range_out_of_bounds_panics() {
        let mut data = vec![3, 2, 1];
        let _ = sort_range(&mut data, 0, 3, &mut Silent);
    }

    #[test]
    fn test_merge_sorted_halves() {
        let mut data = vec![1, 4, 7, 2, 3, 8];
        merge(&mut data, 0, 2, 5, &mut Silent).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 7, 8]);
    }

    #[test]
    fn test_merge_takes_left_on_tie() {
        let mut data = vec![
            Tagged { value: 1, origin: 0 },
            Tagged { value: 1, origin: 1 },
        ];
        merge(&mut data, 0, 0, 1, &mut Silent).unwrap();
        assert_eq!(data[0].origin, 0);
        assert_eq!(data[1].origin, 1);
    }

    #[test]
    fn test_sort_stable() {
        let values = [3u8, 1, 3, 2, 1, 3, 2];
        let mut data: Vec<Tagged> = values
            .iter()
            .enumerate()
            .map(|(origin, &value)| Tagged { value, origin })
            .collect();
        sort(&mut data).unwrap();

        let origins: Vec<usize> = data.iter().map(|t| t.origin).collect();
        assert_eq!(origins, vec![1, 4, 3, 6, 0, 2, 5]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn merge_sort_matches_std(mut v in vec(any::<i32>(), 0..256)) {
            let mut expected = v.clone();
            expected.sort();

            sort(&mut v).unwrap();
            prop_assert_eq!(v, expected);
        }

        #[test]
        fn merge_sort_idempotent(mut v in vec(any::<i16>(), 0..128)) {
            sort(&mut v).unwrap();
            let once = v.clone();
            sort(&mut v).unwrap();
            prop_assert_eq!(v, once);
        }

        #[test]
        fn merge_sort_preserves_order_of_equals(values in vec(0u8..4, 0..96)) {
            let mut data: Vec<Tagged> = values
                .iter()
                .enumerate()
                .map(|(origin, &value)| Tagged { value, origin })
                .collect();
            sort(&mut data).unwrap();

            prop_assert!(is_sorted(&data));
            for pair in data.windows(2) {
                if pair[0].value == pair[1].value {
                    prop_assert!(pair[0].origin < pair[1].origin);
                }
            }
        }
    }
}
