//! The two batch programs: feed a token stream into a union-find or a
//! sort and report the result.
//!
//! Both take their configuration explicitly and write results to any
//! `Write`, so the binaries only parse flags and set up logging.

use std::fmt::Display;
use std::io::Write;

use log::{debug, info, warn};

use super::{partition, Algorithm, DisjointSets, Input, Result, Strategy,
            TokenSource, UnionFinder};

/// Settings for a union-find run.
#[derive(Clone, Debug, Default)]
pub struct UnionFindConfig {
    /// Where the site count and pairs come from.
    pub input: Input,
    /// Which variant to run.
    pub strategy: Strategy,
}

/// Settings for a sort run.
#[derive(Clone, Debug, Default)]
pub struct SortConfig {
    /// Where the tokens come from.
    pub input: Input,
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Sort the tokens as integers rather than strings.
    pub numeric: bool,
}

/// What a union-find run did.
#[derive(Clone, Debug)]
pub struct UnionFindReport {
    /// The final partition.
    pub finder: UnionFinder,
    /// Pairs read from the input.
    pub pairs: usize,
    /// Pairs that merged two components.
    pub unions: usize,
}

impl UnionFindReport {
    /// The number of components left.
    pub fn components(&self) -> usize {
        self.finder.count()
    }
}

/// Opens the configured input and runs it through a union-find.
pub fn run_union_find<W: Write>(config: &UnionFindConfig, out: &mut W)
                                -> Result<UnionFindReport> {
    let source = TokenSource::open(&config.input)?;
    union_find(source, config.strategy, out)
}

/// Reads a site count and then pairs from `source`, unioning each pair.
///
/// An unpaired trailing integer is ignored. A malformed token or a site
/// outside `0 .. count` aborts the run.
pub fn union_find<W: Write>(mut source: TokenSource, strategy: Strategy, out: &mut W)
                            -> Result<UnionFindReport> {
    let sites = source.site_count()?;
    let mut finder = strategy.build(sites)?;
    let len = finder.len();
    info!("Using unionfind of type {} with {} sites.", strategy, len);

    let mut stream = source.into_ints()?;
    let mut pairs = 0;
    let mut unions = 0;

    while let Some(p) = stream.next() {
        let p = p?;
        let q = match stream.next() {
            Some(q) => q?,
            None => {
                warn!("ignoring unpaired trailing site {}", p);
                break;
            }
        };

        let p = partition::site(p, len)?;
        let q = partition::site(q, len)?;
        pairs += 1;

        if finder.union(p, q)? {
            unions += 1;
            debug!("{} {} joined, {} components", p, q, finder.count());
        }
    }

    info!("{} pairs read, {} joined components.", pairs, unions);
    writeln!(out, "{} components.", finder.count())?;

    Ok(UnionFindReport { finder, pairs, unions })
}

/// Opens the configured input and sorts its tokens.
///
/// Returns how many tokens were sorted.
pub fn run_sort<W: Write>(config: &SortConfig, out: &mut W) -> Result<usize> {
    let source = TokenSource::open(&config.input)?;
    sort(source, config.algorithm, config.numeric, out)
}

/// Sorts every token of `source` and writes them out on one line.
pub fn sort<W: Write>(source: TokenSource, algorithm: Algorithm, numeric: bool, out: &mut W)
                      -> Result<usize> {
    info!("Using {} sort.", algorithm);
    if numeric {
        let data = source.into_ints()?.collect::<Result<Vec<_>>>()?;
        sort_data(data, algorithm, out)
    } else {
        let data = source.into_strings()?.collect::<Result<Vec<_>>>()?;
        sort_data(data, algorithm, out)
    }
}

fn sort_data<T, W>(mut data: Vec<T>, algorithm: Algorithm, out: &mut W) -> Result<usize>
    where T: Ord + Clone + Display,
          W: Write
{
    info!("Read {} tokens.", data.len());
    debug!("unsorted: {}", join(&data));

    algorithm.sort(&mut data);

    writeln!(out, "{}", join(&data))?;
    Ok(data.len())
}

fn join<T: Display>(data: &[T]) -> String {
    data.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
