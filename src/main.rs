use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use classic_sorts::{cli, Algorithm};

/// Sorts the given integers with a classic sorting algorithm and prints the array before and
/// after.
#[derive(Parser)]
#[command(name = "sorter", version, allow_negative_numbers = true)]
struct Cli {
    /// Algorithm to run: quickSort, bubbleSort, insertionSort, selectionSort, heapSort,
    /// mergeSort or buildHeap. Lowercase and snake_case spellings work too.
    algorithm: String,

    /// Integers to sort. Everything after the algorithm is taken as a number, so flags go first.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    numbers: Vec<String>,

    /// Log to stderr, -v for debug and -vv for trace. RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn try_main(args: &Cli) -> classic_sorts::Result<()> {
    let algorithm = args.algorithm.parse::<Algorithm>()?;
    let mut numbers = cli::parse_numbers(&args.numbers)?;

    cli::run(algorithm, &mut numbers, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
