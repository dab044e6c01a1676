//! Insertion sort demo.
//!
//! Usage:
//!   insertion-sort [SIZE] [--min N] [--max N] [--seed N] [--delay-ms MS] [--quiet]
//!
//! Without SIZE the program asks for it on stdin.

use clap::Parser;
use std::process::ExitCode;
use stepsort::cli::{self, Algorithm, DemoArgs};

#[derive(Parser)]
#[command(
    name = "insertion-sort",
    version,
    about = "Sort random integers with insertion sort, printing every shift"
)]
struct Cli {
    #[command(flatten)]
    demo: DemoArgs,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging();
    cli::main_with(Algorithm::Insertion, &args.demo)
}
