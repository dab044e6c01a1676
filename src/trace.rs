//! Human-readable narration of a sort.
//!
//! [`TracePrinter`] turns [`Step`]s into the classroom-style trace and owns the
//! optional pause between steps, so the sorting code itself never touches
//! I/O or timing.

use crate::step::{Step, StepObserver};
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Join values with single spaces.
pub fn format_sequence<T: Display>(values: &[T]) -> String {
    Spaced(values).to_string()
}

/// Writes one or more lines per step to `out`.
pub struct TracePrinter<W: Write> {
    out: W,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> TracePrinter<W> {
    pub fn new(out: W) -> Self {
        TracePrinter {
            out,
            delay: Duration::ZERO,
            error: None,
        }
    }

    /// Pause for `delay` after every divide, merge and write step.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Flush and return the writer, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_step<T: Display>(&mut self, step: &Step<'_, T>) -> io::Result<()> {
        match step {
            Step::Insert { index, key } => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "Step {}: Insert {} into the sorted subarray [0..{}]",
                    index,
                    key,
                    index.saturating_sub(1)
                )
            }
            Step::Shift { value, key, data, .. } => {
                writeln!(
                    self.out,
                    "Comparing {} > {}: true, shifting {} to the right",
                    value, key, value
                )?;
                writeln!(self.out, "{}", Spaced(*data))
            }
            Step::Place { position, key, data } => {
                writeln!(self.out, "Placed {} at position {}", key, position)?;
                writeln!(self.out, "{}", Spaced(*data))
            }
            Step::Divide { values, .. } => writeln!(self.out, "Dividing: {}", Spaced(*values)),
            Step::Merge { left, right, .. } => writeln!(
                self.out,
                "Merging left: {} and right: {}",
                Spaced(*left),
                Spaced(*right)
            ),
            Step::Write { data, .. } => writeln!(self.out, "{}", Spaced(*data)),
        }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<T: Display, W: Write> StepObserver<T> for TracePrinter<W> {
    fn on_step(&mut self, step: &Step<'_, T>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_step(step) {
            self.error = Some(err);
            return;
        }
        if !matches!(step, Step::Insert { .. }) {
            self.pause();
        }
    }
}

/// Display adapter for a space-separated sequence.
struct Spaced<'a, T>(&'a [T]);

impl<T: Display> Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
