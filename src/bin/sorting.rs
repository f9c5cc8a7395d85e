//! Reads whitespace-delimited tokens, sorts them, and prints them on one
//! line.

use std::io;

use anyhow::Result;
use clap::Parser;
use union_sort::driver::{self, SortConfig};
use union_sort::{Algorithm, Input};

#[derive(Parser, Debug)]
#[command(name = "sorting", version, about = "Comparison sorts over input tokens", long_about = None)]
struct Args {
    /// Filename or stdin.
    #[arg(short = 'f', value_name = "FILE", default_value = "stdin")]
    file: Input,

    /// Sort type: selection, insertion, shell, merge or quick.
    #[arg(short = 's', value_name = "TYPE", default_value = "selection")]
    sort: Algorithm,

    /// Compare tokens as integers instead of strings.
    #[arg(short, long)]
    numeric: bool,

    /// Echo the unsorted input.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).parse_default_env().init();

    let config = SortConfig {
        input: args.file,
        algorithm: args.sort,
        numeric: args.numeric,
    };

    let stdout = io::stdout();
    driver::run_sort(&config, &mut stdout.lock())?;
    Ok(())
}
