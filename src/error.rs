//! Error type shared by the sorters, the sequence generator and the demo runner.

use std::io;

/// Every failure a demo run can hit. All of them end the run.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The requested sequence length was zero, negative or not a number.
    #[error("array size must be a positive integer, got '{0}'")]
    InvalidSize(String),

    /// The random value range is empty.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    /// Backing storage or a merge buffer could not be reserved.
    #[error("memory allocation failed for {elements} elements")]
    AllocationFailure { elements: usize },

    /// Reading the size or writing the trace failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SortError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
