//! Step-by-step sorting demonstrations.
//!
//! Two classic comparison sorts over mutable slices:
//! - **Insertion Sort**: O(n²), in-place, grows a sorted prefix one key at a time
//! - **Merge Sort**: O(n log n), halves the range and merges through scoped buffers
//!
//! Both report their progress as [`Step`]s to a [`StepObserver`]. The
//! [`TracePrinter`] observer renders the classroom narration used by the
//! `insertion-sort` and `merge-sort` binaries.

pub mod cli;
pub mod error;
pub mod insertion_sort;
pub mod merge_sort;
pub mod sequence;
pub mod step;
pub mod trace;

pub use error::SortError;
pub use step::{Silent, Step, StepObserver};
pub use trace::TracePrinter;
