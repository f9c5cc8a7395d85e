//! Error types shared by the union-find engines, the sorts and the drivers.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading input or operating on a partition.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error opening or reading the input
    #[error("I/O error reading input")]
    Io(#[from] io::Error),

    /// The input file could not be opened
    #[error("cannot open {}", path.display())]
    Open {
        /// The path that was tried.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },

    /// A token that should have been an integer was not
    #[error("malformed integer token {token:?}")]
    Parse {
        /// The offending token.
        token: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },

    /// The input ended before the site count was read
    #[error("input is empty: expected a site count")]
    MissingSiteCount,

    /// A union-find was requested with a negative number of sites
    #[error("site count must not be negative, got {0}")]
    NegativeSize(i64),

    /// A site outside `[0, len)` was passed to an operation
    #[error("site {site} is out of range for {len} sites")]
    SiteOutOfRange {
        /// The rejected site.
        site: i64,
        /// Number of sites in the partition.
        len: usize,
    },

    /// A deserialized union-find does not describe a valid forest
    #[error("invalid union-find state: {0}")]
    InvalidState(String),

    /// Unrecognized union-find strategy name
    #[error("unknown union-find type {0:?}: must be quickfind, quickunion or weighted")]
    UnknownStrategy(String),

    /// Unrecognized sort algorithm name
    #[error("unknown sort type {0:?}: must be selection, insertion, shell, merge or quick")]
    UnknownAlgorithm(String),
}
