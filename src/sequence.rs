//! Input sequences for the demos: size parsing, random generation and verification.

use crate::error::SortError;
use rand::Rng;
use std::fmt;

/// Inclusive bounds for randomly generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: i32,
    max: i32,
}

impl ValueRange {
    /// Range used by the insertion sort demo (1 to 1000).
    pub const INSERTION_DEFAULT: ValueRange = ValueRange { min: 1, max: 1000 };

    /// Range used by the merge sort demo (0 to 100).
    pub const MERGE_DEFAULT: ValueRange = ValueRange { min: 0, max: 100 };

    /// Create a range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, SortError> {
        if min > max {
            return Err(SortError::InvalidRange { min, max });
        }
        Ok(ValueRange { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Parse a sequence length typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a positive integer
/// (zero, negative numbers, text, empty input) is [`SortError::InvalidSize`].
pub fn parse_size(input: &str) -> Result<usize, SortError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => {
            usize::try_from(n).map_err(|_| SortError::InvalidSize(trimmed.to_string()))
        }
        _ => Err(SortError::InvalidSize(trimmed.to_string())),
    }
}

/// Generate `len` random values inside `range`.
///
/// Storage is reserved up front; if it cannot be obtained the call fails with
/// [`SortError::AllocationFailure`] before any value is generated.
pub fn random_sequence<R: Rng + ?Sized>(
    len: usize,
    range: ValueRange,
    rng: &mut R,
) -> Result<Vec<i32>, SortError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| SortError::AllocationFailure { elements: len })?;
    data.extend((0..len).map(|_| rng.gen_range(range.min..=range.max)));
    Ok(data)
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
