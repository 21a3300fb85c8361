use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod duplicates;
mod library;
mod platform;
mod runtime;
mod serato;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    runtime::init_logging(args.verbose);
    runtime::run(args)
}
