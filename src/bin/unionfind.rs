//! Reads a site count and pairs of sites, unions every pair, and prints
//! the number of components left.

use std::io;

use anyhow::Result;
use clap::Parser;
use union_sort::driver::{self, UnionFindConfig};
use union_sort::{Input, Strategy};

#[derive(Parser, Debug)]
#[command(name = "unionfind", version, about = "Union-find over pairs of sites", long_about = None)]
struct Args {
    /// Filename or stdin.
    #[arg(short = 'f', value_name = "FILE", default_value = "stdin")]
    file: Input,

    /// Union-find type: quickfind, quickunion or weighted.
    #[arg(short = 'u', value_name = "TYPE", default_value = "weighted")]
    union_find: Strategy,

    /// Log every effective union.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).parse_default_env().init();

    let config = UnionFindConfig {
        input: args.file,
        strategy: args.union_find,
    };

    let stdout = io::stdout();
    driver::run_union_find(&config, &mut stdout.lock())?;
    Ok(())
}
