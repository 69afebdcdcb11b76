//! Rvgen CLI - emits a stream of random RV32I instructions.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Rvgen - a random RV32I instruction generator
#[derive(Parser, Debug)]
#[command(name = "rvgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of instructions to synthesize
    #[arg(
        short = 'n',
        long,
        default_value_t = 25,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Random seed (default: time-derived)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,

    /// Generate in parallel with this many threads (output is unaffected)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match cli::generate::execute(args.count, args.seed, args.format, args.threads) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
