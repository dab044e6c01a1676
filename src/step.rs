//! Step events and the observer seam.
//!
//! The sorters report every phase boundary and every write into the sequence
//! as a [`Step`]. Observers only ever see the sequence through a shared
//! borrow, so watching a sort can never change its result.

use std::ops::RangeInclusive;

/// One observable moment of a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a, T> {
    /// Insertion sort picked up `key` from `index` and will insert it into
    /// the sorted prefix `[0, index)`.
    Insert { index: usize, key: &'a T },

    /// Insertion sort moved `value` from `from` to `from + 1` because it is
    /// greater than `key`. `data` is the whole sequence after the move.
    Shift {
        from: usize,
        value: &'a T,
        key: &'a T,
        data: &'a [T],
    },

    /// Insertion sort wrote `key` into its final slot of the sorted prefix.
    Place {
        position: usize,
        key: &'a T,
        data: &'a [T],
    },

    /// Merge sort is about to split `range`, whose current contents are `values`.
    Divide {
        range: RangeInclusive<usize>,
        values: &'a [T],
    },

    /// Merge sort copied the two sorted halves of `range` into its buffers.
    Merge {
        range: RangeInclusive<usize>,
        left: &'a [T],
        right: &'a [T],
    },

    /// Merge sort wrote `value` back at `position`. `data` is the sequence
    /// prefix up to the end of the range being merged.
    Write {
        position: usize,
        value: &'a T,
        data: &'a [T],
    },
}

impl<T> Step<'_, T> {
    /// Whether this step follows a write into the sequence.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Step::Shift { .. } | Step::Place { .. } | Step::Write { .. }
        )
    }
}

/// Receives the steps of a sort as they happen.
pub trait StepObserver<T> {
    fn on_step(&mut self, step: &Step<'_, T>);
}

/// Observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl<T> StepObserver<T> for Silent {
    #[inline]
    fn on_step(&mut self, _step: &Step<'_, T>) {}
}

impl<T, F> StepObserver<T> for F
where
    F: FnMut(&Step<'_, T>),
{
    #[inline]
    fn on_step(&mut self, step: &Step<'_, T>) {
        self(step)
    }
}
