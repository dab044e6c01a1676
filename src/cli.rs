//! Command-line front end shared by the `insertion-sort` and `merge-sort` binaries.
//!
//! Both programs follow the same script: read a size, generate random data,
//! sort it while narrating each step, print the result and the elapsed time.

use crate::error::SortError;
use crate::sequence::{self, ValueRange};
use crate::step::{Silent, StepObserver};
use crate::trace::{format_sequence, TracePrinter};
use crate::{insertion_sort, merge_sort};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Which sorter a demo run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Merge,
}

impl Algorithm {
    /// Prompt shown when the size is read from stdin.
    pub fn prompt(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Enter number of elements in the array: ",
            Algorithm::Merge => "Enter array size: ",
        }
    }

    pub fn default_range(self) -> ValueRange {
        match self {
            Algorithm::Insertion => ValueRange::INSERTION_DEFAULT,
            Algorithm::Merge => ValueRange::MERGE_DEFAULT,
        }
    }

    /// Sort `data` with this algorithm, reporting steps to `observer`.
    pub fn sort_observed<O>(self, data: &mut [i32], observer: &mut O) -> Result<(), SortError>
    where
        O: StepObserver<i32> + ?Sized,
    {
        match self {
            Algorithm::Insertion => {
                insertion_sort::sort_observed(data, observer);
                Ok(())
            }
            Algorithm::Merge => merge_sort::sort_observed(data, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Insertion => f.write_str("insertion sort"),
            Algorithm::Merge => f.write_str("merge sort"),
        }
    }
}

/// Options common to both demo programs.
#[derive(Debug, Clone, Default, Args)]
pub struct DemoArgs {
    /// Number of elements to sort (prompted on stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub size: Option<String>,

    /// Smallest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Seed for reproducible input data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause in milliseconds after each traced step
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Print only the generated and sorted arrays
    #[arg(short, long)]
    pub quiet: bool,
}

impl DemoArgs {
    /// Value range from `--min`/`--max`, falling back to the algorithm's preset.
    pub fn value_range(&self, algorithm: Algorithm) -> Result<ValueRange, SortError> {
        let preset = algorithm.default_range();
        ValueRange::new(
            self.min.unwrap_or(preset.min()),
            self.max.unwrap_or(preset.max()),
        )
    }
}

/// Run one demo, reading the size from `input` if it was not given as an argument.
pub fn run<R, W>(
    algorithm: Algorithm,
    args: &DemoArgs,
    input: R,
    out: &mut W,
) -> Result<(), SortError>
where
    R: BufRead,
    W: Write,
{
    let range = args.value_range(algorithm)?;
    let size = match &args.size {
        Some(text) => sequence::parse_size(text)?,
        None => prompt_size(algorithm, input, out)?,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut data = sequence::random_sequence(size, range, &mut rng)?;
    debug!(%algorithm, size, %range, seed = ?args.seed, "generated sequence");

    match algorithm {
        Algorithm::Insertion => {
            writeln!(out, "\nGenerated Array: {}", format_sequence(&data))?;
            if !args.quiet {
                writeln!(out, "\n--- Insertion Sort Steps ---")?;
            }
        }
        Algorithm::Merge => {
            writeln!(out, "Original array:")?;
            writeln!(out, "{}", format_sequence(&data))?;
        }
    }

    let start = Instant::now();
    if args.quiet {
        algorithm.sort_observed(&mut data, &mut Silent)?;
    } else {
        let mut printer =
            TracePrinter::new(&mut *out).with_delay(Duration::from_millis(args.delay_ms));
        debug!(delay = ?printer.delay(), "tracing steps");
        algorithm.sort_observed(&mut data, &mut printer)?;
        printer.finish()?;
    }
    let elapsed = start.elapsed();
    info!(%algorithm, size, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "sort finished");

    match algorithm {
        Algorithm::Insertion => {
            writeln!(out, "\nSorted Array: {}", format_sequence(&data))?;
        }
        Algorithm::Merge => {
            writeln!(out, "Sorted array:")?;
            writeln!(out, "{}", format_sequence(&data))?;
        }
    }
    writeln!(out, "Time taken: {:.6} seconds", elapsed.as_secs_f64())?;
    out.flush()?;
    Ok(())
}

fn prompt_size<R, W>(algorithm: Algorithm, mut input: R, out: &mut W) -> Result<usize, SortError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", algorithm.prompt())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    sequence::parse_size(&line)
}

/// Install the stderr log subscriber, honouring `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Entry point used by both binaries: run against stdin/stdout and map errors to an exit code.
pub fn main_with(algorithm: Algorithm, args: &DemoArgs) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(algorithm, args, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(out);
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
